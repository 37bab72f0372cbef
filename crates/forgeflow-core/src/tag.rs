//! 複合タグ（`<version>-<architecture>`）の合成と分解
//!
//! タグ名の最初の `-` をバージョンとアーキテクチャの区切りとして扱います。
//! この形式が成立するのは、バージョン文字列自体が `-` を含まない場合のみです。
//! そのため上流バージョンに `-` が含まれる場合、オーケストレーターは
//! ビルドを開始する前に拒否します（曖昧なタグを作らない）。

/// バージョンとアーキテクチャから複合タグ名を合成
pub fn image_tag(version: &str, architecture: &str) -> String {
    format!("{}-{}", version, architecture)
}

/// タグ名を最初の `-` で `(バージョン, アーキテクチャ)` に分解
///
/// `-` を含まない名前は複合タグではないので `None` を返す。
pub fn split_tag(name: &str) -> Option<(&str, &str)> {
    name.split_once('-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_tag() {
        assert_eq!(image_tag("1.0.0", "x86_64"), "1.0.0-x86_64");
    }

    #[test]
    fn test_split_tag() {
        assert_eq!(split_tag("1.0.0-x86_64"), Some(("1.0.0", "x86_64")));
        assert_eq!(split_tag("latest-aarch64"), Some(("latest", "aarch64")));
    }

    /// `-` を含まない名前は複合タグとして扱わない
    #[test]
    fn test_split_tag_plain_name() {
        assert_eq!(split_tag("latest"), None);
        assert_eq!(split_tag("1.0.0"), None);
    }

    /// 分解は最初の `-` で行われる（x86_64 側の `_` は無関係）
    #[test]
    fn test_split_tag_first_hyphen() {
        // ハイフン入りバージョンはここでは区別できない。
        // 入口で拒否するのはオーケストレーターの責務。
        assert_eq!(split_tag("1.0-rc1-x86_64"), Some(("1.0", "rc1-x86_64")));
    }

    /// 合成→分解のラウンドトリップ（ハイフンなしバージョンに限る）
    #[test]
    fn test_round_trip() {
        let tag = image_tag("1.17.1", "aarch64");
        assert_eq!(split_tag(&tag), Some(("1.17.1", "aarch64")));
    }
}
