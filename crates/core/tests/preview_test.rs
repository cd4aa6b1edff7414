use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use slotdesk_core::{
    models::upload::UploadFile,
    preview::{ObjectUrlFactory, PreviewUrls},
};

/// Records every URL it hands out and every URL released back to it.
#[derive(Default, Clone)]
struct RecordingFactory {
    created: Arc<Mutex<Vec<String>>>,
    revoked: Arc<Mutex<Vec<String>>>,
}

impl ObjectUrlFactory for RecordingFactory {
    fn create(&mut self, file: &UploadFile) -> Option<String> {
        file.content.as_ref()?;
        let mut created = self.created.lock().unwrap();
        let url = format!("blob:preview/{}", created.len());
        created.push(url.clone());
        Some(url)
    }

    fn revoke(&mut self, url: &str) {
        self.revoked.lock().unwrap().push(url.to_string());
    }
}

#[test]
fn test_local_url_is_created_once_per_file() {
    let factory = RecordingFactory::default();
    let mut previews = PreviewUrls::new(factory.clone());
    let file = UploadFile::local("photo.png", "image/png", vec![1]);

    let first = previews.url_for(&file);
    let second = previews.url_for(&file);

    assert_eq!(first, Some("blob:preview/0".to_string()));
    assert_eq!(first, second);
    assert_eq!(factory.created.lock().unwrap().len(), 1);
}

#[test]
fn test_server_urls_are_never_created_or_revoked() {
    let factory = RecordingFactory::default();
    {
        let mut previews = PreviewUrls::new(factory.clone());
        let file = UploadFile::remote("a", "x.png", "https://cdn.example.com/x.png");

        assert_eq!(
            previews.url_for(&file),
            Some("https://cdn.example.com/x.png".to_string())
        );
        assert!(previews.is_empty());
    }

    assert!(factory.created.lock().unwrap().is_empty());
    assert!(factory.revoked.lock().unwrap().is_empty());
}

#[test]
fn test_files_without_content_get_no_url() {
    let mut previews = PreviewUrls::new(RecordingFactory::default());
    let mut file = UploadFile::local("ghost.png", "image/png", vec![]);
    file.content = None;

    assert_eq!(previews.url_for(&file), None);
    assert!(previews.is_empty());
}

#[test]
fn test_drop_releases_every_created_url() {
    let factory = RecordingFactory::default();
    {
        let mut previews = PreviewUrls::new(factory.clone());
        previews.url_for(&UploadFile::local("a.png", "image/png", vec![1]));
        previews.url_for(&UploadFile::local("b.mp4", "video/mp4", vec![2]));
        assert_eq!(previews.len(), 2);
    }

    let mut revoked = factory.revoked.lock().unwrap().clone();
    revoked.sort();
    assert_eq!(revoked, vec!["blob:preview/0", "blob:preview/1"]);
}

#[test]
fn test_release_all_then_drop_revokes_once() {
    let factory = RecordingFactory::default();
    let mut previews = PreviewUrls::new(factory.clone());
    previews.url_for(&UploadFile::local("a.png", "image/png", vec![1]));

    previews.release_all();
    drop(previews);

    assert_eq!(factory.revoked.lock().unwrap().len(), 1);
}
