use anyhow::Context as _;
use clap::Subcommand;
use lyrebird_shared::SettingsStore;
use lyrebird_subsonic::{AlbumListType, Client, Search3Request};

use crate::print;

const CLIENT_ID: &str = "lyrebird";

#[derive(Subcommand)]
pub enum Command {
    /// Store the server address and credentials.
    Configure {
        address: String,
        username: String,
        password: String,
    },
    /// Check the server is reachable with the stored credentials.
    Ping,
    /// List all artists.
    Artists,
    /// Show an artist and their albums.
    Artist { id: String },
    /// List albums, newest first.
    Albums {
        #[arg(long, default_value_t = 50)]
        size: usize,
        #[arg(long, default_value_t = 0)]
        offset: usize,
    },
    /// Show an album with its songs.
    Album { id: String },
    /// List an album's songs in track order.
    AlbumSongs { id: String },
    /// List every song by an artist.
    ArtistSongs { id: String },
    /// List songs from the whole library.
    Songs {
        #[arg(long, default_value_t = 100)]
        count: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// List playlists.
    Playlists,
    /// Show a playlist with its entries.
    Playlist { id: String },
    /// Search artists, albums and songs.
    Search {
        query: String,
        #[arg(long, default_value_t = 20)]
        artist_count: u32,
        #[arg(long, default_value_t = 20)]
        album_count: u32,
        #[arg(long, default_value_t = 20)]
        song_count: u32,
    },
    /// Print the stream URL for a song.
    StreamUrl { id: String },
    /// Print the cover art URL for an item.
    CoverArtUrl {
        id: String,
        #[arg(long)]
        size: Option<usize>,
    },
}

pub async fn run(store: Box<dyn SettingsStore>, command: Command) -> anyhow::Result<()> {
    let mut client = Client::from_store(store, CLIENT_ID)?;

    match command {
        Command::Configure {
            address,
            username,
            password,
        } => {
            client.configure(address, username, password)?;
            println!("Saved settings for {}", client.address());
        }
        Command::Ping => {
            client
                .ping()
                .await
                .with_context(|| format!("Failed to reach {}", client.address()))?;
            println!("{} is reachable", client.address());
        }
        Command::Artists => print(&client.get_artists().await?)?,
        Command::Artist { id } => print(&client.get_artist(id).await?)?,
        Command::Albums { size, offset } => print(
            &client
                .get_album_list_2(AlbumListType::Newest, Some(size), Some(offset))
                .await?,
        )?,
        Command::Album { id } => print(&client.get_album(id).await?)?,
        Command::AlbumSongs { id } => print(&client.get_album_songs(id).await?)?,
        Command::ArtistSongs { id } => print(&client.get_artist_songs(id).await?)?,
        Command::Songs { count, offset } => print(&client.get_songs(count, offset).await?)?,
        Command::Playlists => print(&client.get_playlists().await?)?,
        Command::Playlist { id } => print(&client.get_playlist(id).await?)?,
        Command::Search {
            query,
            artist_count,
            album_count,
            song_count,
        } => print(
            &client
                .search3(&Search3Request::new(query, artist_count, album_count, song_count))
                .await?,
        )?,
        Command::StreamUrl { id } => println!(
            "{}",
            client.stream_url(id).context("Server is not configured")?
        ),
        Command::CoverArtUrl { id, size } => println!(
            "{}",
            client
                .cover_art_url(id, size)
                .context("Server is not configured")?
        ),
    }

    Ok(())
}
