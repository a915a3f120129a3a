/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::error::Error;
use std::path::PathBuf;

use aws_s3_photo_album::app::{Action, PhotoApp, Surface};
use aws_s3_photo_album::types::PhotoFile;
use aws_sdk_s3::error::DisplayErrorContext;
use clap::Parser;

type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "photo-app")]
#[command(about = "Manages photo albums stored in an S3 bucket and prints the resulting markup.")]
pub struct Args {
    /// Bucket holding the albums
    #[arg(long, env = "PHOTO_ALBUM_BUCKET")]
    bucket: String,

    /// Region of the bucket and identity pool
    #[arg(long, env = "PHOTO_ALBUM_REGION")]
    region: Option<String>,

    /// Cognito identity pool used to obtain temporary credentials
    #[arg(long, env = "PHOTO_ALBUM_IDENTITY_POOL_ID")]
    identity_pool_id: Option<String>,

    /// Custom S3 endpoint, e.g. a local S3 compatible server
    #[arg(long, env = "PHOTO_ALBUM_ENDPOINT_URL")]
    endpoint_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, clap::Subcommand)]
enum Command {
    /// List every album
    List,

    /// Create an album
    Create { name: String },

    /// List the photos of an album
    View { album: String },

    /// Upload a local file into an album
    Add {
        album: String,
        /// Local photo to upload. Omitting it reports that no file was chosen.
        file: Option<PathBuf>,
    },

    /// Delete a photo by its full object key
    DeletePhoto { album: String, key: String },

    /// Delete an album and every photo in it
    DeleteAlbum { album: String },
}

impl Command {
    fn into_action(self) -> Result<Action, BoxError> {
        let action = match self {
            Command::List => Action::ListAlbums,
            Command::Create { name } => Action::CreateAlbum(name),
            Command::View { album } => Action::ViewAlbum(album),
            Command::Add { album, file } => Action::AddPhoto {
                album,
                file: file.map(PhotoFile::from_path).transpose()?,
            },
            Command::DeletePhoto { album, key } => Action::DeletePhoto { album, key },
            Command::DeleteAlbum { album } => Action::DeleteAlbum(album),
        };
        Ok(action)
    }
}

/// Prints markup to stdout and notices to stderr.
#[derive(Debug, Default)]
struct ConsoleSurface;

impl Surface for ConsoleSurface {
    fn render(&mut self, markup: String) {
        println!("{markup}");
    }

    fn notify(&mut self, notice: String) {
        eprintln!("{notice}");
    }
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut loader = aws_s3_photo_album::from_env().bucket(args.bucket);
    if let Some(region) = args.region {
        loader = loader.region(region);
    }
    if let Some(identity_pool_id) = args.identity_pool_id {
        loader = loader.identity_pool_id(identity_pool_id);
    }
    if let Some(endpoint_url) = args.endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }
    let config = loader.load().await;
    let client = aws_s3_photo_album::Client::new(config);

    let action = match args.command.into_action() {
        Ok(action) => action,
        Err(err) => {
            tracing::error!("invalid arguments: {}", DisplayErrorContext(err.as_ref()));
            return Err(err);
        }
    };

    let mut app = PhotoApp::new(client, ConsoleSurface);
    app.dispatch(action).await;
    tracing::debug!("finished in view {:?}", app.view());
    Ok(())
}
