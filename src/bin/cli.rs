//! chubby CLI Client
//!
//! Command-line interface for controlling a chub server.

use std::process;

use chubby::{ChubbyError, Client, Config, Entry, Event, Status, Time};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

/// chubby CLI
#[derive(Parser, Debug)]
#[command(name = "chubby-cli")]
#[command(about = "Remote control for the chub media player")]
#[command(version)]
struct Args {
    /// Server host
    #[arg(short = 'H', long, default_value = "localhost")]
    host: String,

    /// Server port
    #[arg(short, long, default_value = "5115")]
    port: u16,

    /// Greeting lines the server sends on connect
    #[arg(long, default_value = "2")]
    greeting_lines: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show player status
    Status,

    /// Play a file or directory
    Play {
        /// Path on the server
        path: String,
    },

    /// Toggle pause
    Pause,

    /// Stop playback
    Stop,

    /// Next track
    Next,

    /// Previous track
    Prev,

    /// Seek to a position ([H:]M:SS)
    Seek {
        time: Time,

        /// Seek relative to the current position
        #[arg(short, long)]
        relative: bool,
    },

    /// List a directory
    List {
        #[arg(default_value = "/")]
        path: String,
    },

    /// List playlists
    Playlists,

    /// Create a playlist
    CreatePlaylist { name: String },

    /// Delete a playlist
    DeletePlaylist { name: String },

    /// Rename a playlist
    RenamePlaylist { from: String, to: String },

    /// Check the server is alive
    Ping,

    /// Stop the server process
    Kill,

    /// Print events until the connection closes
    Watch,
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,chubby=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .greeting_lines(args.greeting_lines)
        .build();
    let client = Client::new(config);

    if let Err(e) = client.connect(&args.host, args.port) {
        tracing::error!("Failed to connect to {}:{}: {}", args.host, args.port, e);
        process::exit(1);
    }

    let result = run(&client, args.command);
    let closed = client.close();

    if let Err(e) = result.and(closed) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(client: &Client, command: Commands) -> Result<(), ChubbyError> {
    match command {
        Commands::Status => print_status(&client.status()?),
        Commands::Play { path } => client.play(&path)?,
        Commands::Pause => client.pause()?,
        Commands::Stop => client.stop()?,
        Commands::Next => client.next()?,
        Commands::Prev => client.prev()?,
        Commands::Seek { time, relative } => client.seek(time, relative)?,
        Commands::List { path } => {
            for entry in client.list(&path)? {
                match entry {
                    Entry::Dir(dir) => println!("{}/", dir.path),
                    Entry::Track(track) => println!(
                        "{}\t{} - {} ({})",
                        track.path, track.artist, track.title, track.length
                    ),
                }
            }
        }
        Commands::Playlists => {
            for pl in client.playlists()? {
                println!("{}\t{} tracks\t{}", pl.name, pl.length, pl.duration);
            }
        }
        Commands::CreatePlaylist { name } => client.create_playlist(&name)?,
        Commands::DeletePlaylist { name } => client.delete_playlist(&name)?,
        Commands::RenamePlaylist { from, to } => client.rename_playlist(&from, &to)?,
        Commands::Ping => {
            client.ping()?;
            println!("pong");
        }
        Commands::Kill => client.kill()?,
        Commands::Watch => {
            for event in client.subscribe_events()? {
                match event {
                    Event::Status(status) => print_status(&status),
                    Event::CreatePlaylist { name } => println!("playlist created: {}", name),
                    Event::DeletePlaylist { name } => println!("playlist deleted: {}", name),
                }
            }
            if let Some(err) = client.terminal_error() {
                return Err(err);
            }
        }
    }

    Ok(())
}

fn print_status(status: &Status) {
    match (&status.playlist, &status.track) {
        (Some(playlist), Some(track)) => println!(
            "[{}] {} #{}: {} - {} [{}/{}]",
            status.state,
            playlist.name,
            status.playlist_position.unwrap_or_default(),
            track.artist,
            track.title,
            status.track_position.unwrap_or_default(),
            track.length,
        ),
        _ => println!("[{}]", status.state),
    }
}
