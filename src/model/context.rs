use std::collections::HashMap;

/// Invocation context handed to every accessor call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Current {
    /// Name of the operation being invoked (e.g. "getValue")
    pub operation: String,
    pub request_id: u64,
    /// Free-form key/value context supplied by the caller
    pub ctx: HashMap<String, String>,
}

impl Current {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            ..Self::default()
        }
    }

    pub fn with_request_id(mut self, request_id: u64) -> Self {
        self.request_id = request_id;
        self
    }

    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.ctx.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.ctx.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let current = Current::default();
        assert!(current.operation.is_empty());
        assert_eq!(current.request_id, 0);
        assert!(current.ctx.is_empty());
    }

    #[test]
    fn test_builder() {
        let current = Current::new("copy")
            .with_request_id(7)
            .with_context("group", "lab-3");
        assert_eq!(current.operation, "copy");
        assert_eq!(current.request_id, 7);
        assert_eq!(current.get("group"), Some("lab-3"));
        assert_eq!(current.get("user"), None);
    }
}
