/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::Error;
use crate::types::PhotoFile;
use crate::{render, Client};

/// The host that displays markup and notices produced by a [`PhotoApp`].
pub trait Surface {
    /// Replace the content of the mount point with `markup`.
    fn render(&mut self, markup: String);

    /// Show a blocking notice to the user.
    fn notify(&mut self, notice: String);
}

/// The view currently shown on the surface.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Every album in the bucket
    #[default]
    AlbumList,

    /// The photos of the named album
    AlbumDetail(String),
}

/// A user intent triggered from the surface.
#[derive(Debug)]
pub enum Action {
    /// Show the album list. Also used to go back from an album.
    ListAlbums,

    /// Create an album from a raw, unvalidated name
    CreateAlbum(String),

    /// Show the photos of an album
    ViewAlbum(String),

    /// Upload the selected file, if any, into an album
    AddPhoto {
        /// Album name
        album: String,
        /// The selected file
        file: Option<PhotoFile>,
    },

    /// Delete a photo by its full object key
    DeletePhoto {
        /// Album name
        album: String,
        /// Full object key of the photo
        key: String,
    },

    /// Delete an album and its photos
    DeleteAlbum(String),
}

/// Album and photo manager that renders into a [`Surface`].
///
/// Every handler is terminal: failures are reported with [`Surface::notify`] and leave the
/// current view and markup untouched.
#[derive(Debug)]
pub struct PhotoApp<S> {
    client: Client,
    surface: S,
    view: View,
}

impl<S: Surface> PhotoApp<S> {
    /// Create an app showing the album list view. Nothing is rendered until the first action.
    pub fn new(client: Client, surface: S) -> Self {
        Self {
            client,
            surface,
            view: View::default(),
        }
    }

    /// The view currently shown
    pub fn view(&self) -> &View {
        &self.view
    }

    /// The surface this app renders into
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Run the handler for `action`.
    pub async fn dispatch(&mut self, action: Action) {
        tracing::debug!("dispatching {action:?}");
        match action {
            Action::ListAlbums => self.list_albums().await,
            Action::CreateAlbum(name) => self.create_album(name).await,
            Action::ViewAlbum(name) => self.view_album(name).await,
            Action::AddPhoto { album, file } => self.add_photo(album, file).await,
            Action::DeletePhoto { album, key } => self.delete_photo(album, key).await,
            Action::DeleteAlbum(name) => self.delete_album(name).await,
        }
    }

    /// Render the album list.
    pub async fn list_albums(&mut self) {
        match self.client.list_albums().send().await {
            Ok(output) => {
                self.surface.render(render::album_list(&output));
                self.view = View::AlbumList;
            }
            Err(err) => self.report("There was an error listing your albums: ", err),
        }
    }

    /// Create an album and show it.
    pub async fn create_album(&mut self, name: String) {
        match self.client.create_album().album_name(name).send().await {
            Ok(output) => {
                self.surface.notify("Successfully created album.".to_owned());
                self.view_album(output.album().name().to_owned()).await;
            }
            Err(err) => self.report("There was an error creating your album: ", err),
        }
    }

    /// Render the photos of an album.
    pub async fn view_album(&mut self, name: String) {
        match self.client.view_album().album_name(&name).send().await {
            Ok(output) => {
                self.surface.render(render::album_detail(&output));
                self.view = View::AlbumDetail(name);
            }
            Err(err) => self.report("There was an error viewing your album: ", err),
        }
    }

    /// Upload a photo and show its album again.
    pub async fn add_photo(&mut self, album: String, file: Option<PhotoFile>) {
        let result = self
            .client
            .add_photo()
            .album_name(&album)
            .set_file(file)
            .send()
            .await;
        match result {
            Ok(_) => {
                self.surface.notify("Successfully uploaded photo.".to_owned());
                self.view_album(album).await;
            }
            Err(err) => self.report("There was an error uploading your photo: ", err),
        }
    }

    /// Delete a photo and show its album again.
    pub async fn delete_photo(&mut self, album: String, key: String) {
        let result = self
            .client
            .delete_photo()
            .album_name(&album)
            .photo_key(key)
            .send()
            .await;
        match result {
            Ok(_) => self.view_album(album).await,
            Err(err) => self.report("There was an error deleting your photo: ", err),
        }
    }

    /// Delete an album and return to the album list.
    pub async fn delete_album(&mut self, name: String) {
        match self.client.delete_album().album_name(name).send().await {
            Ok(_) => {
                self.list_albums().await;
                self.surface.notify("Successfully deleted album.".to_owned());
            }
            Err(err) => self.report("There was an error deleting your album: ", err),
        }
    }

    fn report(&mut self, prefix: &str, err: Error) {
        tracing::debug!(
            "{prefix}{}",
            aws_sdk_s3::error::DisplayErrorContext(&err)
        );
        let notice = if err.is_validation_error() {
            err.message()
        } else {
            format!("{prefix}{}", err.message())
        };
        self.surface.notify(notice);
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::error::ErrorMetadata;
    use aws_sdk_s3::operation::delete_object::DeleteObjectError;
    use aws_sdk_s3::operation::delete_objects::{DeleteObjectsError, DeleteObjectsOutput};
    use aws_sdk_s3::operation::list_objects_v2::{ListObjectsV2Error, ListObjectsV2Output};
    use aws_sdk_s3::operation::put_object::{PutObjectError, PutObjectOutput};
    use aws_sdk_s3::types::{CommonPrefix, Object};
    use aws_smithy_mocks_experimental::{mock, mock_client, Rule, RuleMode};
    use test_common::mock_client_with_stubbed_http_client;

    use super::{Action, PhotoApp, Surface, View};
    use crate::operation::test_util::TEST_BUCKET;
    use crate::types::PhotoFile;
    use crate::{Client, Config};

    #[derive(Debug, PartialEq)]
    enum Event {
        Render(String),
        Notify(String),
    }

    #[derive(Debug, Default)]
    struct RecordingSurface {
        events: Vec<Event>,
    }

    impl Surface for RecordingSurface {
        fn render(&mut self, markup: String) {
            self.events.push(Event::Render(markup));
        }

        fn notify(&mut self, notice: String) {
            self.events.push(Event::Notify(notice));
        }
    }

    fn app(s3: aws_sdk_s3::Client) -> PhotoApp<RecordingSurface> {
        let config = Config::builder()
            .bucket(TEST_BUCKET)
            .region("us-east-1")
            .client(s3)
            .build();
        PhotoApp::new(Client::new(config), RecordingSurface::default())
    }

    fn listing(keys: &[&str]) -> ListObjectsV2Output {
        let contents = keys
            .iter()
            .map(|k| Object::builder().key(*k).build())
            .collect();
        ListObjectsV2Output::builder()
            .set_contents(Some(contents))
            .build()
    }

    fn access_denied() -> ErrorMetadata {
        ErrorMetadata::builder()
            .code("AccessDenied")
            .message("Access Denied")
            .build()
    }

    #[tokio::test]
    async fn test_empty_bucket_renders_empty_album_list() {
        let list = mock!(aws_sdk_s3::Client::list_objects_v2)
            .then_output(|| ListObjectsV2Output::builder().build());
        let mut app = app(mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&list]));

        app.dispatch(Action::ListAlbums).await;
        assert_eq!(&View::AlbumList, app.view());
        match app.surface().events.as_slice() {
            [Event::Render(markup)] => {
                assert!(markup.contains("You don't have any albums."))
            }
            other => panic!("unexpected events {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_album_name_notifies_bare_message() {
        let put_object =
            mock!(aws_sdk_s3::Client::put_object).then_output(|| PutObjectOutput::builder().build());
        let mut app = app(mock_client!(aws_sdk_s3, RuleMode::MatchAny, &[&put_object]));

        app.dispatch(Action::CreateAlbum("a/b".to_owned())).await;
        app.dispatch(Action::CreateAlbum("   ".to_owned())).await;
        assert_eq!(&View::AlbumList, app.view());
        assert_eq!(
            vec![
                Event::Notify("Album names cannot contain slashes.".to_owned()),
                Event::Notify(
                    "Album names must contain at least one non-space character.".to_owned()
                ),
            ],
            app.surface().events
        );
        assert_eq!(0, put_object.num_calls());
    }

    #[tokio::test]
    async fn test_create_album_notifies_then_shows_album() {
        let put_object = mock!(aws_sdk_s3::Client::put_object)
            .match_requests(|r| r.key() == Some("Trip%202024/"))
            .then_output(|| PutObjectOutput::builder().build());
        let list = mock!(aws_sdk_s3::Client::list_objects_v2)
            .match_requests(|r| r.prefix() == Some("Trip%202024/"))
            .then_output(|| listing(&["Trip%202024/"]));
        let mut app = app(mock_client!(
            aws_sdk_s3,
            RuleMode::Sequential,
            &[&put_object, &list]
        ));

        app.dispatch(Action::CreateAlbum("  Trip 2024 ".to_owned()))
            .await;
        assert_eq!(&View::AlbumDetail("Trip 2024".to_owned()), app.view());
        let events = &app.surface().events;
        assert_eq!(
            Event::Notify("Successfully created album.".to_owned()),
            events[0]
        );
        match &events[1] {
            Event::Render(markup) => assert!(markup.contains("<b>Trip 2024</b>")),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_storage_failure_keeps_view() {
        let list = mock!(aws_sdk_s3::Client::list_objects_v2)
            .then_output(|| listing(&["pets/"]));
        let failing_list = mock!(aws_sdk_s3::Client::list_objects_v2)
            .then_error(|| ListObjectsV2Error::generic(access_denied()));
        let mut app = app(mock_client_with_stubbed_http_client!(
            aws_sdk_s3,
            RuleMode::Sequential,
            &[&list, &failing_list]
        ));

        app.dispatch(Action::ViewAlbum("pets".to_owned())).await;
        app.dispatch(Action::ListAlbums).await;
        assert_eq!(&View::AlbumDetail("pets".to_owned()), app.view());
        assert_eq!(
            Some(&Event::Notify(
                "There was an error listing your albums: Access Denied".to_owned()
            )),
            app.surface().events.last()
        );
        assert_eq!(2, app.surface().events.len());
    }

    #[tokio::test]
    async fn test_every_action_reports_storage_failure() {
        let tests: Vec<(Action, Vec<Rule>, &str)> = vec![
            (
                Action::ListAlbums,
                vec![mock!(aws_sdk_s3::Client::list_objects_v2)
                    .then_error(|| ListObjectsV2Error::generic(access_denied()))],
                "There was an error listing your albums: ",
            ),
            (
                Action::CreateAlbum("pets".to_owned()),
                vec![mock!(aws_sdk_s3::Client::put_object)
                    .then_error(|| PutObjectError::generic(access_denied()))],
                "There was an error creating your album: ",
            ),
            (
                Action::ViewAlbum("pets".to_owned()),
                vec![mock!(aws_sdk_s3::Client::list_objects_v2)
                    .then_error(|| ListObjectsV2Error::generic(access_denied()))],
                "There was an error viewing your album: ",
            ),
            (
                Action::AddPhoto {
                    album: "pets".to_owned(),
                    file: Some(PhotoFile::from_bytes("cat.jpg", &b"meow"[..])),
                },
                vec![mock!(aws_sdk_s3::Client::put_object)
                    .then_error(|| PutObjectError::generic(access_denied()))],
                "There was an error uploading your photo: ",
            ),
            (
                Action::DeletePhoto {
                    album: "pets".to_owned(),
                    key: "pets/cat.jpg".to_owned(),
                },
                vec![mock!(aws_sdk_s3::Client::delete_object)
                    .then_error(|| DeleteObjectError::generic(access_denied()))],
                "There was an error deleting your photo: ",
            ),
            (
                Action::DeleteAlbum("pets".to_owned()),
                vec![
                    mock!(aws_sdk_s3::Client::list_objects_v2)
                        .then_output(|| listing(&["pets/", "pets/cat.jpg"])),
                    mock!(aws_sdk_s3::Client::delete_objects)
                        .then_error(|| DeleteObjectsError::generic(access_denied())),
                ],
                "There was an error deleting your album: ",
            ),
        ];

        for (action, rules, prefix) in tests {
            let description = format!("{action:?}");
            let mut app = app(mock_client_with_stubbed_http_client!(
                aws_sdk_s3,
                RuleMode::MatchAny,
                rules.as_slice()
            ));

            app.dispatch(action).await;
            assert_eq!(&View::AlbumList, app.view(), "{description}");
            assert_eq!(
                vec![Event::Notify(format!("{prefix}Access Denied"))],
                app.surface().events,
                "{description}"
            );
            for rule in &rules {
                assert_eq!(1, rule.num_calls(), "{description}");
            }
        }
    }

    #[tokio::test]
    async fn test_add_photo_without_file() {
        let put_object =
            mock!(aws_sdk_s3::Client::put_object).then_output(|| PutObjectOutput::builder().build());
        let mut app = app(mock_client!(aws_sdk_s3, RuleMode::MatchAny, &[&put_object]));

        app.dispatch(Action::AddPhoto {
            album: "pets".to_owned(),
            file: None,
        })
        .await;
        assert_eq!(
            vec![Event::Notify("Choose a file to upload first.".to_owned())],
            app.surface().events
        );
    }

    #[tokio::test]
    async fn test_add_photo_shows_album() {
        let put_object = mock!(aws_sdk_s3::Client::put_object)
            .match_requests(|r| r.key() == Some("pets/cat.jpg"))
            .then_output(|| PutObjectOutput::builder().build());
        let list = mock!(aws_sdk_s3::Client::list_objects_v2)
            .then_output(|| listing(&["pets/", "pets/cat.jpg"]));
        let mut app = app(mock_client!(
            aws_sdk_s3,
            RuleMode::Sequential,
            &[&put_object, &list]
        ));

        app.dispatch(Action::AddPhoto {
            album: "pets".to_owned(),
            file: Some(PhotoFile::from_bytes("cat.jpg", &b"meow"[..])),
        })
        .await;
        assert_eq!(&View::AlbumDetail("pets".to_owned()), app.view());
        let events = &app.surface().events;
        assert_eq!(
            Event::Notify("Successfully uploaded photo.".to_owned()),
            events[0]
        );
        match &events[1] {
            Event::Render(markup) => assert!(markup.contains(r#"data-key="pets/cat.jpg""#)),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delete_album_returns_to_list() {
        let list_album = mock!(aws_sdk_s3::Client::list_objects_v2)
            .match_requests(|r| r.prefix() == Some("pets/"))
            .then_output(|| listing(&["pets/", "pets/a.jpg"]));
        let delete = mock!(aws_sdk_s3::Client::delete_objects)
            .then_output(|| DeleteObjectsOutput::builder().build());
        let list_albums = mock!(aws_sdk_s3::Client::list_objects_v2)
            .match_requests(|r| r.delimiter() == Some("/"))
            .then_output(|| {
                ListObjectsV2Output::builder()
                    .common_prefixes(CommonPrefix::builder().prefix("travel/").build())
                    .build()
            });
        let mut app = app(mock_client!(
            aws_sdk_s3,
            RuleMode::Sequential,
            &[&list_album, &delete, &list_albums]
        ));

        app.dispatch(Action::DeleteAlbum("pets".to_owned())).await;
        assert_eq!(&View::AlbumList, app.view());
        let events = &app.surface().events;
        match &events[0] {
            Event::Render(markup) => {
                assert!(markup.contains("travel"));
                assert!(!markup.contains("pets"));
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert_eq!(
            Event::Notify("Successfully deleted album.".to_owned()),
            events[1]
        );
    }
}
