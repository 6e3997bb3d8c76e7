use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Filters accepted by `GET /tg/group/list/json`. Absent fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupListParams {
    pub account_id: Option<String>,
    pub group_name: Option<String>,
    pub chat_id: Option<String>,
    pub group_link: Option<String>,
    pub remark: Option<String>,
    pub tag_ids: Option<String>,
}

impl GroupListParams {
    /// Copy of these params with the free-text name replaced.
    pub fn with_group_name(&self, group_name: &str) -> Self {
        Self {
            group_name: Some(group_name.to_string()),
            ..self.clone()
        }
    }

    pub(crate) fn query_pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("account_id", &self.account_id),
            ("group_name", &self.group_name),
            ("chat_id", &self.chat_id),
            ("group_link", &self.group_link),
            ("remark", &self.remark),
            ("tag_ids", &self.tag_ids),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
    }
}

/// A monitored group as returned by the listing endpoint.
///
/// Only the fields this tool reads are typed; everything else the server sends
/// is kept in `extra` and serialized back unchanged.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TgGroup {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members_count: Option<i64>,
    /// ISO-8601 timestamp of the newest captured message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_postal_time: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TgGroup {
    /// Last-activity timestamp; an empty string counts as absent.
    pub fn last_activity(&self) -> Option<&str> {
        self.latest_postal_time.as_deref().filter(|t| !t.is_empty())
    }

    pub fn display_name(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .or(self.name.as_deref())
            .unwrap_or("")
    }
}

/// The `payload` of a successful listing response.
///
/// `extra` carries the auxiliary fields (`tag_list`, `default_account_id`,
/// `default_group_name`, `default_remark`, `role_ids`, ...) verbatim.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GroupPage {
    pub data: Vec<TgGroup>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response envelope used by every console endpoint. `err_code == 0` means success.
#[derive(Debug, Deserialize, Serialize)]
pub struct Envelope<P> {
    pub err_code: i64,
    #[serde(default)]
    pub err_msg: String,
    #[serde(default)]
    pub payload: P,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_pairs_skip_absent_fields() {
        let params = GroupListParams {
            group_name: Some("网络".into()),
            tag_ids: Some("1,2".into()),
            ..Default::default()
        };
        let pairs: Vec<_> = params.query_pairs().collect();
        assert_eq!(pairs, vec![("group_name", "网络"), ("tag_ids", "1,2")]);
    }

    #[test]
    fn with_group_name_keeps_other_filters() {
        let params = GroupListParams {
            account_id: Some("acc-1".into()),
            group_name: Some("网络".into()),
            ..Default::default()
        };
        let variant = params.with_group_name("網絡");
        assert_eq!(variant.group_name.as_deref(), Some("網絡"));
        assert_eq!(variant.account_id.as_deref(), Some("acc-1"));
    }

    #[test]
    fn group_keeps_unknown_fields() {
        let json = serde_json::json!({
            "id": 7,
            "name": "g",
            "chat_id": "-100123",
            "records_count": 42,
            "latest_postal_time": "2024-05-01 10:00:00"
        });
        let group: TgGroup = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(group.id, 7);
        assert_eq!(group.extra["records_count"], 42);
        assert_eq!(serde_json::to_value(&group).unwrap(), json);
    }

    #[test]
    fn empty_timestamp_counts_as_absent() {
        let group: TgGroup =
            serde_json::from_value(serde_json::json!({"id": 1, "latest_postal_time": ""}))
                .unwrap();
        assert_eq!(group.last_activity(), None);
    }

    #[test]
    fn page_keeps_auxiliary_fields() {
        let page: GroupPage = serde_json::from_value(serde_json::json!({
            "data": [],
            "tag_list": [{"id": 1, "name": "crypto"}],
            "default_account_id": "acc-1"
        }))
        .unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.extra["default_account_id"], "acc-1");
        assert!(page.extra["tag_list"].is_array());
    }

    #[test]
    fn display_name_prefers_title() {
        let group: TgGroup = serde_json::from_value(serde_json::json!({
            "id": 1, "name": "name", "title": "Title"
        }))
        .unwrap();
        assert_eq!(group.display_name(), "Title");
    }
}
