pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn message_response_omits_missing_id() {
        let body = serde_json::to_value(types::MessageResponse::ok("done")).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "done");
        assert!(body.get("id").is_none());

        let body = serde_json::to_value(types::MessageResponse::created("made", "abc")).unwrap();
        assert_eq!(body["id"], "abc");
    }

    #[test]
    fn data_response_wraps_payload() {
        let body = serde_json::to_value(types::DataResponse::new(vec![1, 2, 3])).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], serde_json::json!([1, 2, 3]));
    }
}
