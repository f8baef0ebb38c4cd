//! Tests for the protocol codec
//!
//! These tests verify:
//! - Request line encoding and argument quoting
//! - Rejection of commands that would break line framing
//! - Header classification (OK / ERR / EVENT)
//! - Record block reading up to the empty terminator
//! - Event decoding through the dispatch table

use std::io::Cursor;

use chubby::model::State;
use chubby::protocol::{
    decode_header, encode_command, events, names, read_block, write_command, Arg, Command, Event,
    Header,
};
use chubby::{parse, ChubbyError, Time};

// =============================================================================
// Helper Functions
// =============================================================================

fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

// =============================================================================
// Request Encoding Tests
// =============================================================================

#[test]
fn test_encode_bare_command() {
    let line = encode_command(&Command::new(names::PING)).unwrap();
    assert_eq!(line, "ping");
}

#[test]
fn test_encode_argument_literals() {
    let command = Command::new("test")
        .arg("abc")
        .arg(42i64)
        .arg(true)
        .arg(false)
        .arg(Time::from_secs(62));

    assert_eq!(
        encode_command(&command).unwrap(),
        r#"test "abc" 42 true false "1:02""#
    );
}

#[test]
fn test_encode_negative_integer_is_a_valid_literal() {
    let command = Command::new("volume").arg(-5i64);
    let line = encode_command(&command).unwrap();
    assert_eq!(line, "volume -5");

    let literal = line.split_once(' ').unwrap().1;
    let parsed = parse(&format!("n: {}", literal)).unwrap();
    assert_eq!(parsed.integer("n").unwrap(), -5);
}

#[test]
fn test_encode_escapes_quotes_and_backslashes() {
    let command = Command::new(names::PLAY).arg(r#"/music/a "b" \c"#);

    assert_eq!(
        encode_command(&command).unwrap(),
        r#"play "/music/a \"b\" \\c""#
    );
}

#[test]
fn test_encode_unicode_string() {
    let command = Command::new(names::CREATE_PLAYLIST).arg("абвгд");
    assert_eq!(encode_command(&command).unwrap(), "create-playlist \"абвгд\"");
}

#[test]
fn test_encode_long_time_argument() {
    let command = Command::new(names::SEEK)
        .arg(Time::from_secs(3723))
        .arg(false);

    assert_eq!(encode_command(&command).unwrap(), r#"seek "1:02:03" false"#);
}

#[test]
fn test_with_args_matches_builder() {
    let built = Command::new(names::RENAME_PLAYLIST).arg("a").arg("b");
    let listed = Command::with_args(
        names::RENAME_PLAYLIST,
        &[Arg::from("a"), Arg::Str("b".to_string())],
    );

    assert_eq!(built, listed);
    assert_eq!(listed.name(), "rename-playlist");
    assert_eq!(listed.args().len(), 2);
}

#[test]
fn test_encode_rejects_line_breaks() {
    let command = Command::new(names::PLAY).arg("a\nb");
    assert!(matches!(
        encode_command(&command),
        Err(ChubbyError::InvalidArgument(_))
    ));

    let command = Command::new(names::PLAY).arg("a\rb");
    assert!(matches!(
        encode_command(&command),
        Err(ChubbyError::InvalidArgument(_))
    ));
}

#[test]
fn test_encode_rejects_bad_names() {
    for name in ["", "two words", "tab\tname", "line\nbreak"] {
        assert!(
            matches!(
                encode_command(&Command::new(name)),
                Err(ChubbyError::InvalidArgument(_))
            ),
            "name {:?} should be rejected",
            name
        );
    }
}

#[test]
fn test_write_command_appends_newline() {
    let mut out: Vec<u8> = Vec::new();

    write_command(&mut out, &Command::new(names::LIST).arg("/")).unwrap();
    write_command(&mut out, &Command::new(names::STATUS)).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "list \"/\"\nstatus\n");
}

#[test]
fn test_write_command_writes_nothing_on_error() {
    let mut out: Vec<u8> = Vec::new();

    let result = write_command(&mut out, &Command::new(names::PLAY).arg("x\ny"));

    assert!(result.is_err());
    assert!(out.is_empty());
}

// =============================================================================
// Header Decoding Tests
// =============================================================================

#[test]
fn test_decode_ok() {
    assert_eq!(decode_header("OK").unwrap(), Header::Ok(None));
    assert_eq!(
        decode_header("OK 3 entries").unwrap(),
        Header::Ok(Some("3 entries".to_string()))
    );
}

#[test]
fn test_decode_err() {
    let header = decode_header("ERR no such file").unwrap();

    assert_eq!(header, Header::Err("no such file".to_string()));
    assert!(!header.has_body());
}

#[test]
fn test_decode_event() {
    let header = decode_header("EVENT status").unwrap();

    assert_eq!(header, Header::Event("status".to_string()));
    assert!(header.has_body());
}

#[test]
fn test_decode_event_without_name() {
    assert!(matches!(
        decode_header("EVENT"),
        Err(ChubbyError::Protocol(_))
    ));
    assert!(matches!(
        decode_header("EVENT  "),
        Err(ChubbyError::Protocol(_))
    ));
}

#[test]
fn test_decode_unexpected_header() {
    for line in ["", "ok", "HELLO", "state: \"playing\"", "ERR"] {
        assert!(
            matches!(decode_header(line), Err(ChubbyError::Protocol(_))),
            "line {:?} should be rejected",
            line
        );
    }
}

#[test]
fn test_protocol_errors_are_fatal() {
    let err = decode_header("BOGUS").unwrap_err();
    assert!(err.is_fatal());
    assert!(!err.is_server_error());
}

// =============================================================================
// Block Reading Tests
// =============================================================================

#[test]
fn test_read_block_stops_at_terminator() {
    let mut input = Cursor::new(b"a: 1\nb: 2\n\nOK\n".as_slice());

    let block = read_block(&mut input).unwrap();
    assert_eq!(block, lines(&["a: 1", "b: 2"]));

    // The terminator is consumed, the next header is left in place
    let mut rest = String::new();
    std::io::BufRead::read_line(&mut input, &mut rest).unwrap();
    assert_eq!(rest, "OK\n");
}

#[test]
fn test_read_empty_block() {
    let mut input = Cursor::new(b"\n".as_slice());
    assert!(read_block(&mut input).unwrap().is_empty());
}

#[test]
fn test_read_block_strips_crlf() {
    let mut input = Cursor::new(b"a: 1\r\n\r\n".as_slice());
    assert_eq!(read_block(&mut input).unwrap(), lines(&["a: 1"]));
}

#[test]
fn test_read_block_eof_is_transport_error() {
    let mut input = Cursor::new(b"a: 1\n".as_slice());

    let err = read_block(&mut input).unwrap_err();
    assert!(matches!(err, ChubbyError::Transport(_)));
    assert!(err.is_fatal());
}

// =============================================================================
// Event Decoding Tests
// =============================================================================

#[test]
fn test_decode_playlist_events() {
    let created = Event::decode(events::CREATE_PLAYLIST, &lines(&[r#"name: "road trip""#]))
        .unwrap()
        .unwrap();
    assert_eq!(
        created,
        Event::CreatePlaylist {
            name: "road trip".to_string()
        }
    );
    assert_eq!(created.name(), "create-playlist");

    let deleted = Event::decode(events::DELETE_PLAYLIST, &lines(&[r#"name: "old""#]))
        .unwrap()
        .unwrap();
    assert_eq!(
        deleted,
        Event::DeletePlaylist {
            name: "old".to_string()
        }
    );
}

#[test]
fn test_decode_status_event_merges_lines() {
    let body = lines(&[
        r#"state: "paused", playlist-position: 1, track-position: 10"#,
        r#"playlist-name: "*vpl*", playlist-duration: 300, playlist-length: 2"#,
        r#"track-path: "/a.mp3", track-artist: "A", track-album: "B", track-title: "C", track-number: 1, track-length: 150"#,
    ]);

    let event = Event::decode(events::STATUS, &body).unwrap().unwrap();
    let Event::Status(status) = event else {
        panic!("expected a status event");
    };

    assert_eq!(status.state, State::Paused);
    assert_eq!(status.track_position, Some(Time::from_secs(10)));
    assert_eq!(status.playlist.unwrap().name, "*vpl*");
    assert_eq!(status.track.unwrap().path, "/a.mp3");
}

#[test]
fn test_decode_stopped_status_event() {
    let event = Event::decode(events::STATUS, &lines(&[r#"state: "stopped""#]))
        .unwrap()
        .unwrap();

    match event {
        Event::Status(status) => assert!(status.is_stopped()),
        other => panic!("unexpected event {:?}", other),
    }
}

#[test]
fn test_decode_unknown_event_is_skipped() {
    assert_eq!(
        Event::decode("volume", &lines(&["level: 3"])).unwrap(),
        None
    );
    // Unknown events are skipped even when their body would not parse
    assert_eq!(Event::decode("volume", &lines(&["???"])).unwrap(), None);
}

#[test]
fn test_decode_malformed_event() {
    let err = Event::decode(events::CREATE_PLAYLIST, &lines(&["name 1"])).unwrap_err();
    assert!(matches!(err, ChubbyError::Syntax(_)));

    let err = Event::decode(events::CREATE_PLAYLIST, &lines(&["name: 1"])).unwrap_err();
    assert!(matches!(err, ChubbyError::FieldType { .. }));

    let err = Event::decode(events::DELETE_PLAYLIST, &[]).unwrap_err();
    assert!(matches!(err, ChubbyError::MissingField { .. }));
}
