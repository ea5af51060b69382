/// Comment entity tests against a live database
pub mod comment_tests;

/// Model construction tests that need no database
mod model_tests {
    use crate::{comment, errors::ModelError};

    #[test]
    fn new_model_rejects_blank_text() {
        let err = comment::new_model("   ", None).unwrap_err();
        assert!(matches!(err, ModelError::Validation(_)));
    }

    #[test]
    fn new_model_sets_identity_and_timestamps() {
        let a = comment::new_model("first", Some("ann")).unwrap();
        let b = comment::new_model("second", None).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.author.as_deref(), Some("ann"));
        assert_eq!(a.created_at, a.updated_at);
    }

    #[test]
    fn model_serializes_all_fields() {
        let m = comment::new_model("hello", None).unwrap();
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["id"], m.id.to_string());
        assert_eq!(v["text"], "hello");
        assert!(v["author"].is_null());
        assert!(v["created_at"].is_string());
    }
}
