//! Elements kept locally before the server-side store existed

use serde::{Deserialize, Serialize};

use crate::store::LocalStore;

pub const LEGACY_ELEMENTS_KEY: &str = "nano-banana-elements";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyElement {
    pub handle: String,
    pub base64: String,
    #[serde(default)]
    pub created_at: i64,
}

pub fn get_legacy_elements(store: &LocalStore) -> Vec<LegacyElement> {
    store.get(LEGACY_ELEMENTS_KEY)
}

/// Keep only `remaining`, or drop the key once nothing is left
pub fn retain_legacy_elements(store: &LocalStore, remaining: &[LegacyElement]) -> anyhow::Result<()> {
    if remaining.is_empty() {
        store.remove(LEGACY_ELEMENTS_KEY)
    } else {
        store.set(LEGACY_ELEMENTS_KEY, &remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_web_client_format() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        std::fs::write(
            dir.path().join(format!("{}.json", LEGACY_ELEMENTS_KEY)),
            r#"[{"handle":"@Riley","base64":"data:image/png;base64,AAAA","createdAt":1}]"#,
        )
        .unwrap();

        let elements = get_legacy_elements(&store);
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].handle, "@Riley");
    }

    #[test]
    fn test_retain_partial_then_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        let a = LegacyElement {
            handle: "@a".to_string(),
            base64: "x".to_string(),
            created_at: 1,
        };
        let b = LegacyElement {
            handle: "@b".to_string(),
            ..a.clone()
        };
        store.set(LEGACY_ELEMENTS_KEY, &vec![a, b.clone()]).unwrap();

        retain_legacy_elements(&store, &[b.clone()]).unwrap();
        assert_eq!(get_legacy_elements(&store), vec![b]);

        retain_legacy_elements(&store, &[]).unwrap();
        assert!(get_legacy_elements(&store).is_empty());
        assert!(!dir
            .path()
            .join(format!("{}.json", LEGACY_ELEMENTS_KEY))
            .exists());
    }
}
