use std::path::Path;

// Artwork paths are stored relative to the media root, one subdirectory per
// upload kind, and served back under `/media/`.

pub const MEDIA_URL: &str = "/media";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadKind {
    Actors,
    Movies,
    MovieShots,
}

impl UploadKind {
    const ALL: [UploadKind; 3] = [UploadKind::Actors, UploadKind::Movies, UploadKind::MovieShots];

    pub fn dir(self) -> &'static str {
        match self {
            UploadKind::Actors => "actors",
            UploadKind::Movies => "movies",
            UploadKind::MovieShots => "movie_shots",
        }
    }

    pub fn path_for(self, filename: &str) -> String {
        format!("{}/{}", self.dir(), filename)
    }
}

pub fn ensure_layout(root: &Path) -> std::io::Result<()> {
    for kind in UploadKind::ALL {
        std::fs::create_dir_all(root.join(kind.dir()))?;
    }
    Ok(())
}

pub fn media_url(path: &str) -> String {
    format!("{MEDIA_URL}/{path}")
}
