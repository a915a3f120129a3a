/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Every user supplied value is HTML escaped before it is placed in text or an attribute.
//! Controls carry a `data-action` attribute naming the [`Action`](crate::app::Action) they
//! trigger, with `data-album` and `data-key` holding its arguments.

use crate::operation::list_albums::ListAlbumsOutput;
use crate::operation::view_album::ViewAlbumOutput;
use crate::types::Photo;

const CREATE_ALBUM_BUTTON: &str = r#"<button data-action="create-album">
Create new album
</button>"#;

const BACK_BUTTON: &str = r#"<button data-action="list-albums">
Back to albums
</button>"#;

/// Markup for the album list view.
pub fn album_list(output: &ListAlbumsOutput) -> String {
    if output.albums().is_empty() {
        return [
            "<p>You don't have any albums. You need to create an album.</p>",
            CREATE_ALBUM_BUTTON,
        ]
        .join("\n");
    }

    let mut lines = vec![
        "<h2>Albums</h2>".to_owned(),
        "<p>Click an album name to view it.</p>".to_owned(),
        "<p>Click the X to delete the album.</p>".to_owned(),
        "<ul>".to_owned(),
    ];
    for album in output.albums() {
        let name = escape(album.name());
        lines.push("<li>".to_owned());
        lines.push(format!(
            r#"<span style="color:red" data-action="delete-album" data-album="{name}">X</span>"#
        ));
        lines.push(format!(
            r#"<span data-action="view-album" data-album="{name}">"#
        ));
        lines.push(name);
        lines.push("</span>".to_owned());
        lines.push("</li>".to_owned());
    }
    lines.push("</ul>".to_owned());
    lines.push(CREATE_ALBUM_BUTTON.to_owned());
    lines.join("\n")
}

/// Markup for the photos of a single album.
pub fn album_detail(output: &ViewAlbumOutput) -> String {
    let name = escape(output.album().name());
    let empty_notice = format!(
        "<p>You don't have any photos in this album named <b>{name}</b>. You need to add photos.</p>"
    );

    let mut lines = if output.photos().is_empty() {
        vec![
            empty_notice,
            "<p>First browse a photo to select it. Then click Add Photo to add photo to the album.</p>"
                .to_owned(),
        ]
    } else {
        let mut lines = vec![
            format!("<h2>Album: {name}</h2>"),
            "<p>Click the X to delete the photo.</p>".to_owned(),
            "<div>".to_owned(),
        ];
        for photo in output.photos() {
            lines.push(photo_entry(&name, photo));
        }
        lines.push("</div>".to_owned());
        lines
    };

    lines.push("<br/>".to_owned());
    lines.push(r#"<input id="photoupload" type="file" accept="image/*">"#.to_owned());
    lines.push(format!(
        r#"<button id="addphoto" data-action="add-photo" data-album="{name}">"#
    ));
    lines.push("Add photo".to_owned());
    lines.push("</button>".to_owned());
    lines.push(BACK_BUTTON.to_owned());
    lines.join("\n")
}

fn photo_entry(album_name: &str, photo: &Photo) -> String {
    let key = escape(photo.key());
    [
        "<span>".to_owned(),
        "<div>".to_owned(),
        format!(
            r#"<img style="width:128px;height:128px;" src="{}"/>"#,
            escape(photo.url())
        ),
        "</div>".to_owned(),
        "<div>".to_owned(),
        format!(
            r#"<span style="color:red" data-action="delete-photo" data-album="{album_name}" data-key="{key}">"#
        ),
        "X".to_owned(),
        "</span>".to_owned(),
        "<span>".to_owned(),
        escape(photo.name()),
        "</span>".to_owned(),
        "</div>".to_owned(),
        "</span>".to_owned(),
        "<br/>".to_owned(),
    ]
    .join("\n")
}

/// Escape text for use in HTML content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{album_detail, album_list, escape};
    use crate::operation::list_albums::ListAlbumsOutput;
    use crate::operation::view_album::ViewAlbumOutput;
    use crate::types::{Album, Photo};

    fn photo(album: &Album, name: &str) -> Photo {
        let key = format!("{}{name}", album.key());
        Photo {
            url: format!("https://s3.us-east-1.amazonaws.com/test-bucket/{key}"),
            name: name.to_owned(),
            key,
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            "&lt;b&gt;Tom &amp; Jerry&#39;s &quot;pics&quot;&lt;/b&gt;",
            escape(r#"<b>Tom & Jerry's "pics"</b>"#)
        );
    }

    #[test]
    fn test_empty_album_list() {
        let markup = album_list(&ListAlbumsOutput::builder().build());
        assert!(markup.contains("You don't have any albums. You need to create an album."));
        assert!(markup.contains(r#"data-action="create-album""#));
        assert!(!markup.contains("<h2>Albums</h2>"));
    }

    #[test]
    fn test_album_list_entries() {
        let output = ListAlbumsOutput::builder()
            .albums(Album::from_key("Trip%202024/"))
            .albums(Album::from_key("pets/"))
            .build();
        let markup = album_list(&output);
        assert!(markup.starts_with("<h2>Albums</h2>\n"));
        assert!(markup.contains("Click an album name to view it."));
        assert!(markup.contains("Click the X to delete the album."));
        assert!(markup.contains(r#"data-action="view-album" data-album="Trip 2024""#));
        assert!(markup.contains(r#"data-action="delete-album" data-album="pets""#));
        assert!(markup.find("Trip 2024") < markup.find("pets"));
    }

    #[test]
    fn test_album_names_are_escaped() {
        let output = ListAlbumsOutput::builder()
            .albums(Album::from_name("<script>"))
            .build();
        let markup = album_list(&output);
        assert!(markup.contains("&lt;script&gt;"));
        assert!(!markup.contains("<script>"));
    }

    #[test]
    fn test_empty_album_detail() {
        let output = ViewAlbumOutput::builder()
            .album(Album::from_name("Trip 2024"))
            .build();
        let markup = album_detail(&output);
        assert!(markup.contains(
            "You don't have any photos in this album named <b>Trip 2024</b>. You need to add photos."
        ));
        assert!(markup.contains(r#"<input id="photoupload" type="file" accept="image/*">"#));
        assert!(markup.contains(r#"data-action="add-photo" data-album="Trip 2024""#));
        assert!(markup.contains("Back to albums"));
        assert!(!markup.contains("<img"));
    }

    #[test]
    fn test_album_detail_photos() {
        let album = Album::from_name("pets");
        let output = ViewAlbumOutput::builder()
            .photos(photo(&album, "a.jpg"))
            .photos(photo(&album, "b.jpg"))
            .album(album)
            .build();
        let markup = album_detail(&output);
        assert!(markup.starts_with("<h2>Album: pets</h2>\n"));
        assert!(markup.contains("Click the X to delete the photo."));
        assert!(markup.contains(
            r#"<img style="width:128px;height:128px;" src="https://s3.us-east-1.amazonaws.com/test-bucket/pets/a.jpg"/>"#
        ));
        assert!(markup.contains(r#"data-action="delete-photo" data-album="pets" data-key="pets/b.jpg""#));
        assert!(markup.contains("\nb.jpg\n"));
        assert!(markup.contains("Back to albums"));
    }
}
