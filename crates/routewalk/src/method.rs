/// HTTP verb set recognized by the route mapper
///
/// Route modules declare handlers under well-known export names
/// (`_get`, `_post`, ...). Anything outside this set is not a verb and
/// is ignored wherever string-keyed maps are interpreted.

use serde::Serialize;
use std::fmt;

/// A recognized HTTP verb, plus the `all` catch-all slot.
///
/// The set is closed: per-method config, middleware, and error-handler
/// maps are keyed by these names, and unknown keys are dead entries.
///
/// # Examples
///
/// ```
/// use routewalk::Method;
///
/// assert_eq!(Method::parse("get"), Some(Method::Get));
/// assert_eq!(Method::parse("head"), None);
/// assert_eq!(Method::Patch.export_name(), "_patch");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Get,
    Post,
    Delete,
    Put,
    Patch,
    All,
}

impl Method {
    /// The order in which a file's verb exports are inspected and
    /// registered. This order is observable: it drives both host
    /// registration order and ledger order for a single file, so it
    /// must stay stable.
    pub const REGISTRATION_ORDER: [Method; 6] = [
        Method::Get,
        Method::Post,
        Method::Delete,
        Method::Put,
        Method::Patch,
        Method::All,
    ];

    /// Parses a lowercase verb token into a `Method`.
    ///
    /// Returns `None` for anything outside the recognized set; callers
    /// drop such entries silently.
    pub fn parse(token: &str) -> Option<Method> {
        match token {
            "get" => Some(Method::Get),
            "post" => Some(Method::Post),
            "delete" => Some(Method::Delete),
            "put" => Some(Method::Put),
            "patch" => Some(Method::Patch),
            "all" => Some(Method::All),
            _ => None,
        }
    }

    /// Lowercase verb name as used in ledger rows and map keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Delete => "delete",
            Method::Put => "put",
            Method::Patch => "patch",
            Method::All => "all",
        }
    }

    /// Well-known module export name for this verb's handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use routewalk::Method;
    ///
    /// assert_eq!(Method::Get.export_name(), "_get");
    /// assert_eq!(Method::All.export_name(), "_all");
    /// ```
    pub fn export_name(&self) -> &'static str {
        match self {
            Method::Get => "_get",
            Method::Post => "_post",
            Method::Delete => "_delete",
            Method::Put => "_put",
            Method::Patch => "_patch",
            Method::All => "_all",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recognized_verbs() {
        assert_eq!(Method::parse("get"), Some(Method::Get));
        assert_eq!(Method::parse("post"), Some(Method::Post));
        assert_eq!(Method::parse("delete"), Some(Method::Delete));
        assert_eq!(Method::parse("put"), Some(Method::Put));
        assert_eq!(Method::parse("patch"), Some(Method::Patch));
        assert_eq!(Method::parse("all"), Some(Method::All));
    }

    #[test]
    fn test_parse_rejects_unknown_tokens() {
        assert_eq!(Method::parse("head"), None);
        assert_eq!(Method::parse("options"), None);
        assert_eq!(Method::parse("GET"), None); // exact lowercase match only
        assert_eq!(Method::parse(""), None);
    }

    #[test]
    fn test_registration_order_is_stable() {
        let names: Vec<&str> = Method::REGISTRATION_ORDER
            .iter()
            .map(|m| m.as_str())
            .collect();
        assert_eq!(names, vec!["get", "post", "delete", "put", "patch", "all"]);
    }

    #[test]
    fn test_export_names() {
        for method in Method::REGISTRATION_ORDER {
            assert_eq!(method.export_name(), format!("_{}", method.as_str()));
        }
    }
}
