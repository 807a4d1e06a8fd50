use anyhow::Context as _;
use clap::Subcommand;
use lyrebird_audiostation::Client;
use lyrebird_shared::SettingsStore;

use crate::print;

#[derive(Subcommand)]
pub enum Command {
    /// Store the server address and credentials.
    Configure {
        address: String,
        username: String,
        password: String,
    },
    /// Print the stream URL for a song.
    ///
    /// The URL carries a live session: the CLI does not log out afterwards,
    /// so the URL stays usable until the server expires the session.
    StreamUrl { id: String },
    /// Print the cover art URL for a song.
    ///
    /// Like `stream-url`, the session is left open for the URL to use.
    CoverArtUrl {
        id: String,
        #[arg(long)]
        size: Option<usize>,
    },
    #[command(flatten)]
    Session(SessionCommand),
}

/// Commands that log in, talk to the server, and log out again.
#[derive(Subcommand)]
pub enum SessionCommand {
    /// Check the server accepts the stored credentials.
    Ping,
    /// Show the AudioStation version and privileges.
    Info,
    /// List artists.
    Artists {
        #[arg(long, default_value_t = 100)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Show a single artist.
    Artist { name: String },
    /// List albums by name.
    Albums {
        #[arg(long, default_value_t = 100)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Show a single album.
    Album { name: String, album_artist: String },
    /// List an album's songs in track order.
    AlbumSongs { name: String, album_artist: String },
    /// List every song by an artist.
    ArtistSongs { artist: String },
    /// List songs from the whole library.
    Songs {
        #[arg(long, default_value_t = 100)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Show a single song.
    Song { id: String },
    /// List playlists.
    Playlists,
    /// Show a playlist with its songs.
    Playlist { id: String },
    /// List the remote players attached to the NAS.
    RemotePlayers,
    /// Search songs, albums and artists.
    Search { keyword: String },
}

pub async fn run(store: Box<dyn SettingsStore>, command: Command) -> anyhow::Result<()> {
    let mut client = Client::from_store(store)?;

    match command {
        Command::Configure {
            address,
            username,
            password,
        } => {
            client.configure(address, username, password)?;
            println!("Saved settings for {}", client.address());
        }
        Command::StreamUrl { id } => {
            login(&mut client).await?;
            println!("{}", client.stream_url(id).context("Not logged in")?);
        }
        Command::CoverArtUrl { id, size } => {
            login(&mut client).await?;
            println!(
                "{}",
                client.cover_art_url(id, size).context("Not logged in")?
            );
        }
        Command::Session(command) => {
            login(&mut client).await?;
            let result = run_session(&client, command).await;
            client.logout().await;
            result?;
        }
    }
    Ok(())
}

async fn login(client: &mut Client) -> anyhow::Result<()> {
    client
        .login()
        .await
        .with_context(|| format!("Failed to log in to {}", client.address()))
}

async fn run_session(client: &Client, command: SessionCommand) -> anyhow::Result<()> {
    match command {
        SessionCommand::Ping => println!("{} is reachable", client.address()),
        SessionCommand::Info => print(&client.get_info().await?)?,
        SessionCommand::Artists { limit, offset } => {
            print(&client.get_artists(limit, offset).await?)?
        }
        SessionCommand::Artist { name } => print(&client.get_artist(name).await?)?,
        SessionCommand::Albums { limit, offset } => {
            print(&client.get_albums(limit, offset).await?)?
        }
        SessionCommand::Album { name, album_artist } => {
            print(&client.get_album(name, album_artist).await?)?
        }
        SessionCommand::AlbumSongs { name, album_artist } => {
            print(&client.get_album_songs(name, album_artist).await?)?
        }
        SessionCommand::ArtistSongs { artist } => {
            print(&client.get_artist_songs(artist).await?)?
        }
        SessionCommand::Songs { limit, offset } => {
            print(&client.get_songs(limit, offset).await?)?
        }
        SessionCommand::Song { id } => print(&client.get_song(id).await?)?,
        SessionCommand::Playlists => print(&client.get_playlists().await?)?,
        SessionCommand::Playlist { id } => print(&client.get_playlist(id).await?)?,
        SessionCommand::RemotePlayers => print(&client.get_remote_players().await?)?,
        SessionCommand::Search { keyword } => print(&client.search(keyword).await?)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn test_url_commands_are_not_session_commands() {
        let cli = Cli::try_parse_from(["audiostation", "stream-url", "music_1"]).unwrap();
        assert!(matches!(cli.command, Command::StreamUrl { id } if id == "music_1"));

        let cli =
            Cli::try_parse_from(["audiostation", "cover-art-url", "music_1", "--size", "300"])
                .unwrap();
        assert!(matches!(cli.command, Command::CoverArtUrl { size: Some(300), .. }));
    }

    #[test]
    fn test_catalog_commands_run_in_a_session() {
        let cli = Cli::try_parse_from(["audiostation", "album-songs", "Kind of Blue", "Miles Davis"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Command::Session(SessionCommand::AlbumSongs { .. })
        ));

        let cli = Cli::try_parse_from(["audiostation", "ping"]).unwrap();
        assert!(matches!(cli.command, Command::Session(SessionCommand::Ping)));
    }
}
