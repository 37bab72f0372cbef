//! リリースAPIのデータモデル

use serde::Deserialize;

/// 上流の1リリース
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub tag_name: String,
}

/// 新しい順のリリース列からタグ名を最大 `n` 件取り出す
///
/// APIは `per_page` を超える件数を返すことがあるため、ここでも切り詰める。
pub fn take_recent_tags(releases: Vec<Release>, n: usize) -> Vec<String> {
    releases
        .into_iter()
        .take(n)
        .map(|release| release.tag_name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 5件返ってきても要求した3件だけが新しい順に得られることを確認
    #[test]
    fn test_take_recent_tags_truncates() {
        let json = r#"[
            {"tag_name": "1.4.0"},
            {"tag_name": "1.3.2"},
            {"tag_name": "1.3.1"},
            {"tag_name": "1.3.0"},
            {"tag_name": "1.2.9"}
        ]"#;
        let releases: Vec<Release> = serde_json::from_str(json).expect("releases should decode");
        let tags = take_recent_tags(releases, 3);
        assert_eq!(tags, vec!["1.4.0", "1.3.2", "1.3.1"]);
    }

    /// 要求より少ない場合はある分だけ返ることを確認
    #[test]
    fn test_take_recent_tags_short_list() {
        let releases = vec![Release {
            tag_name: "1.0.0".to_string(),
        }];
        assert_eq!(take_recent_tags(releases, 3), vec!["1.0.0"]);
    }

    /// 単一リリースのレスポンスがデコードできることを確認
    #[test]
    fn test_decode_single_release() {
        let json = r#"{"tag_name": "1.17.1", "name": "1.17.1", "draft": false}"#;
        let release: Release = serde_json::from_str(json).expect("release should decode");
        assert_eq!(release.tag_name, "1.17.1");
    }
}
