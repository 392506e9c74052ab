//! Navigation tree and per-menu permission sets
//!
//! The backend sends the whole tree once per login. Each node carries its own
//! permission set; nothing is inherited from the parent.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Visibility tier enforced by the backend, shown for information only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataScope {
    Own,
    Team,
    Org,
    Global,
}

impl DataScope {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Own => "Own records",
            Self::Team => "Team records",
            Self::Org => "Organization",
            Self::Global => "Global",
        }
    }
}

impl fmt::Display for DataScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Actions that can be gated on a menu node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionAction {
    View,
    Create,
    Edit,
    Delete,
    Export,
    Import,
    Print,
}

impl PermissionAction {
    /// Name of the matching flag in the backend payload
    pub const fn flag(self) -> &'static str {
        match self {
            Self::View => "can_view",
            Self::Create => "can_create",
            Self::Edit => "can_edit",
            Self::Delete => "can_delete",
            Self::Export => "can_export",
            Self::Import => "can_import",
            Self::Print => "can_print",
        }
    }
}

/// Permission set attached to one menu node.
///
/// Flags missing from the payload are denied; the default value is the
/// empty set used for keys that are not in the tree at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct MenuPermission {
    pub can_view: bool,
    pub can_create: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    pub can_export: bool,
    pub can_import: bool,
    pub can_print: bool,
    #[serde(deserialize_with = "lenient_scope")]
    pub data_scope: Option<DataScope>,
}

impl MenuPermission {
    /// Check a single flag
    pub const fn allows(&self, action: PermissionAction) -> bool {
        match action {
            PermissionAction::View => self.can_view,
            PermissionAction::Create => self.can_create,
            PermissionAction::Edit => self.can_edit,
            PermissionAction::Delete => self.can_delete,
            PermissionAction::Export => self.can_export,
            PermissionAction::Import => self.can_import,
            PermissionAction::Print => self.can_print,
        }
    }
}

// Unknown scope strings ("NONE", typos) are treated as no scope
fn lenient_scope<'de, D>(deserializer: D) -> Result<Option<DataScope>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| match s.to_ascii_uppercase().as_str() {
        "OWN" => Some(DataScope::Own),
        "TEAM" => Some(DataScope::Team),
        "ORG" => Some(DataScope::Org),
        "GLOBAL" => Some(DataScope::Global),
        _ => None,
    }))
}

/// One node of the navigation tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Stable menu key, e.g. `crm_enquiries`
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub permissions: MenuPermission,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MenuItem>>,
}

impl MenuItem {
    pub fn children(&self) -> &[MenuItem] {
        self.children.as_deref().unwrap_or_default()
    }

    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    fn any_descendant_matches(&self, location: &str) -> bool {
        self.children().iter().any(|child| {
            child
                .path
                .as_deref()
                .is_some_and(|p| path_matches(location, p))
                || child.any_descendant_matches(location)
        })
    }
}

/// The complete navigation tree of the current user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuTree {
    items: Vec<MenuItem>,
}

impl MenuTree {
    pub const fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Depth-first lookup of the first node with the given key
    pub fn find(&self, key: &str) -> Option<&MenuItem> {
        fn walk<'a>(items: &'a [MenuItem], key: &str) -> Option<&'a MenuItem> {
            items.iter().find_map(|item| {
                if item.id == key {
                    Some(item)
                } else {
                    walk(item.children(), key)
                }
            })
        }
        walk(&self.items, key)
    }

    /// Permission set for a key, or the empty set when the key is unknown
    pub fn permissions(&self, key: &str) -> MenuPermission {
        self.find(key)
            .map(|item| item.permissions.clone())
            .unwrap_or_default()
    }

    /// Permission gate: one flag of one node
    pub fn can(&self, key: &str, action: PermissionAction) -> bool {
        self.find(key)
            .is_some_and(|item| item.permissions.allows(action))
    }

    /// Tree restricted to viewable nodes, for the sidebar.
    ///
    /// Group nodes (no path of their own) disappear when none of their
    /// children survive.
    pub fn visible(&self) -> Self {
        fn keep(items: &[MenuItem]) -> Vec<MenuItem> {
            items
                .iter()
                .filter(|item| item.permissions.can_view)
                .filter_map(|item| {
                    let children = item.children.as_deref().map(keep);
                    match children {
                        Some(children) if children.is_empty() => {
                            item.path.as_ref().map(|_| MenuItem {
                                children: None,
                                ..item.clone()
                            })
                        }
                        children => Some(MenuItem {
                            children,
                            ..item.clone()
                        }),
                    }
                })
                .collect()
        }
        Self::new(keep(&self.items))
    }

    /// Key of the top-level group containing the page at `location`
    pub fn open_group_for(&self, location: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.any_descendant_matches(location))
            .map(|item| item.id.as_str())
    }
}

impl From<Vec<MenuItem>> for MenuTree {
    fn from(items: Vec<MenuItem>) -> Self {
        Self::new(items)
    }
}

/// Whether `location` is the page at `prefix` or one of its sub-pages
pub fn path_matches(location: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return false;
    }
    location == prefix
        || location
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/') || rest.starts_with('?'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree() -> MenuTree {
        serde_json::from_value(json!([
            {
                "id": "dashboard",
                "title": "Dashboard",
                "path": "/app/dashboard",
                "permissions": { "can_view": true, "data_scope": "OWN" }
            },
            {
                "id": "crm",
                "title": "CRM",
                "permissions": { "can_view": true },
                "children": [
                    {
                        "id": "crm_enquiries",
                        "title": "Enquiries",
                        "path": "/app/crm/enquiries",
                        "permissions": {
                            "can_view": true,
                            "can_create": true,
                            "can_edit": false,
                            "can_export": true,
                            "data_scope": "TEAM"
                        }
                    },
                    {
                        "id": "crm_customers",
                        "title": "Customers",
                        "path": "/app/crm/customers",
                        "permissions": { "can_view": false }
                    }
                ]
            },
            {
                "id": "finance",
                "title": "Finance",
                "permissions": { "can_view": true },
                "children": [
                    {
                        "id": "finance_invoices",
                        "title": "Invoices",
                        "path": "/app/finance/invoices",
                        "permissions": { "can_view": false }
                    }
                ]
            },
            {
                "id": "settings",
                "title": "Settings",
                "path": "/app/settings"
            }
        ]))
        .unwrap()
    }

    #[test]
    fn finds_nested_nodes_by_key() {
        let tree = tree();
        let node = tree.find("crm_enquiries").unwrap();
        assert_eq!(node.title, "Enquiries");
        assert!(tree.find("missing").is_none());
    }

    #[test]
    fn missing_flags_are_denied() {
        let perms = tree().permissions("crm_enquiries");
        assert!(perms.can_view);
        assert!(perms.can_create);
        assert!(!perms.can_edit);
        assert!(!perms.can_delete);
        assert!(!perms.can_import);
        assert_eq!(perms.data_scope, Some(DataScope::Team));
    }

    #[test]
    fn unknown_key_yields_empty_permission_set() {
        let perms = tree().permissions("nope");
        assert_eq!(perms, MenuPermission::default());
        assert_eq!(perms.data_scope, None);
        assert!(!tree().can("nope", PermissionAction::View));
    }

    #[test]
    fn gate_checks_exactly_one_flag() {
        let tree = tree();
        assert!(tree.can("crm_enquiries", PermissionAction::Export));
        assert!(!tree.can("crm_enquiries", PermissionAction::Edit));
        assert!(!tree.can("crm_enquiries", PermissionAction::Print));
    }

    #[test]
    fn children_inherit_nothing() {
        let tree = tree();
        assert!(tree.can("crm", PermissionAction::View));
        assert!(!tree.can("crm_customers", PermissionAction::View));
    }

    #[test]
    fn unknown_scope_is_none() {
        let perms: MenuPermission =
            serde_json::from_value(json!({ "can_view": true, "data_scope": "NONE" })).unwrap();
        assert_eq!(perms.data_scope, None);
    }

    #[test]
    fn visible_tree_drops_hidden_and_empty_groups() {
        let visible = tree().visible();
        let ids: Vec<_> = visible.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["dashboard", "crm"]);

        let crm = visible.find("crm").unwrap();
        let children: Vec<_> = crm.children().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(children, ["crm_enquiries"]);
    }

    #[test]
    fn open_group_follows_location() {
        let tree = tree();
        assert_eq!(tree.open_group_for("/app/crm/enquiries"), Some("crm"));
        assert_eq!(tree.open_group_for("/app/crm/enquiries/12/edit"), Some("crm"));
        assert_eq!(tree.open_group_for("/app/dashboard"), None);
        assert_eq!(tree.open_group_for("/app/crm/enquiries-archive"), None);
    }

    #[test]
    fn path_matching_respects_segments() {
        assert!(path_matches("/app/crm", "/app/crm"));
        assert!(path_matches("/app/crm/x", "/app/crm/"));
        assert!(path_matches("/app/crm?page=2", "/app/crm"));
        assert!(!path_matches("/app/crmx", "/app/crm"));
        assert!(!path_matches("/app", ""));
    }
}
