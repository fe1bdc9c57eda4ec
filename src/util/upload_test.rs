use super::*;

#[test]
fn accepts_jpeg_and_png() {
    assert_eq!(validate("image/jpeg", 1024), Ok(ImageKind::Jpeg));
    assert_eq!(validate("image/png", 1024), Ok(ImageKind::Png));
    assert_eq!(validate(" IMAGE/PNG ", 1), Ok(ImageKind::Png));
}

#[test]
fn rejects_other_types() {
    for mime in ["image/gif", "application/dicom", "image/jpg", ""] {
        let expected = UploadError::UnsupportedType(mime.to_owned());
        assert_eq!(validate(mime, 10), Err(expected), "mime {mime:?}");
    }
}

#[test]
fn rejects_empty_files() {
    assert_eq!(validate("image/png", 0), Err(UploadError::Empty));
}

#[test]
fn enforces_size_limit() {
    let limit = MAX_UPLOAD_BYTES;
    assert_eq!(validate("image/jpeg", limit), Ok(ImageKind::Jpeg));
    let over = limit + 1;
    let too_large = Err(UploadError::TooLarge(over));
    assert_eq!(validate("image/jpeg", over), too_large);
}

#[test]
fn error_messages_are_user_facing() {
    let too_large = UploadError::TooLarge(1).to_string();
    assert_eq!(too_large, "The image exceeds the 5 MB upload limit.");
    assert_eq!(
        UploadError::UnsupportedType("image/gif".to_owned()).to_string(),
        "Unsupported file format (image/gif). Use JPG or PNG."
    );
}

#[test]
fn mime_round_trips() {
    for kind in [ImageKind::Jpeg, ImageKind::Png] {
        assert_eq!(ImageKind::from_mime(kind.mime()), Some(kind));
    }
}

#[test]
fn revoke_preview_is_callable_outside_the_browser() {
    revoke_preview("blob:nothing");
}
