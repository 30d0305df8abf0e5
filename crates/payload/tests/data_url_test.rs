use batchform_core::errors::FormError;
use batchform_payload::{DataUrl, DataUrlFile};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_parse_named_png() {
    let url = DataUrl::parse("data:image/png;name=logo.png;base64,aGVsbG8=").unwrap();

    assert_eq!(
        url,
        DataUrl {
            mime_type: "image/png".to_string(),
            filename: "logo".to_string(),
            extension: "png".to_string(),
            b64data: "aGVsbG8=".to_string(),
        }
    );
    assert_eq!(url.file_name_with_extension(), "logo.png");
}

#[test]
fn test_extra_parameters_are_skipped() {
    let url = DataUrl::parse("data:application/json;charset=utf-8;name=report.json;size=12;base64,e30=").unwrap();

    assert_eq!(url.mime_type, "application/json");
    assert_eq!(url.filename, "report");
    assert_eq!(url.extension, "json");
    assert_eq!(url.b64data, "e30=");
}

#[test]
fn test_name_is_percent_decoded() {
    let url = DataUrl::parse("data:text/plain;name=quarterly%20plan.txt;base64,eA==").unwrap();

    assert_eq!(url.filename, "quarterly plan");
}

#[test]
fn test_name_splits_at_first_dot() {
    let url = DataUrl::parse("data:application/gzip;name=archive.tar.gz;base64,eA==").unwrap();

    assert_eq!(url.filename, "archive");
    assert_eq!(url.extension, "tar.gz");
}

#[rstest]
#[case("data:image/png;base64,aGVsbG8=")]
#[case("data:image/png;name=logo.png;aGVsbG8=")]
#[case("hello")]
#[case("")]
fn test_missing_parts_are_rejected(#[case] input: &str) {
    let err = DataUrl::parse(input).unwrap_err();

    assert!(matches!(err, FormError::InvalidDataUrl(_)));
    assert!(err.to_string().contains("Ensure it includes name and base64 parts"));
}

#[test]
fn test_to_file_decodes_payload() {
    let file = DataUrl::parse("data:text/plain;name=greeting.txt;base64,aGVsbG8=")
        .unwrap()
        .to_file()
        .unwrap();

    assert_eq!(
        file,
        DataUrlFile {
            name: "greeting.txt".to_string(),
            mime_type: "text/plain".to_string(),
            bytes: b"hello".to_vec(),
        }
    );
}

#[test]
fn test_bad_base64_payload_fails_on_decode_only() {
    let url: DataUrl = "data:text/plain;name=a.txt;base64,@@@".parse().unwrap();

    assert!(matches!(url.buffer(), Err(FormError::Decode(_))));
}

#[rstest]
#[case("aGk=")]
#[case("aGk")]
#[case("aG k=\n")]
fn test_padding_and_whitespace_are_optional(#[case] payload: &str) {
    let url = DataUrl::parse(&format!("data:text/plain;name=a.txt;base64,{payload}")).unwrap();

    assert_eq!(url.buffer().unwrap(), b"hi".to_vec());
}
