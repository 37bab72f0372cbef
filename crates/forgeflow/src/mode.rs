//! 引数列から実行モードを決める

/// 1回の起動で行う処理
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// 最新リリースを latest としてビルド・公開・整備
    Latest,
    /// 新しい順にN件のリリースをビルド・公開・整備（latest扱いしない）
    Recent(usize),
    /// マニフェスト整備のみ（ビルドもバージョン解決もしない）
    Manifests,
    /// 明示されたバージョンをビルド・公開・整備
    Versions(Vec<String>),
}

impl RunMode {
    /// 引数列を実行モードに分類する
    ///
    /// - 引数なし → `Latest`
    /// - `manifest` / `manifests` 1つ → `Manifests`
    /// - 正の整数1つ → `Recent(n)`（`0` はエラー）
    /// - それ以外 → 全引数を明示バージョンとして `Versions`
    pub fn classify(targets: &[String]) -> anyhow::Result<RunMode> {
        match targets {
            [] => Ok(RunMode::Latest),
            [single] if single == "manifest" || single == "manifests" => Ok(RunMode::Manifests),
            [single] if single.chars().all(|c| c.is_ascii_digit()) => {
                match single.parse::<usize>() {
                    Ok(n) if n >= 1 => Ok(RunMode::Recent(n)),
                    _ => Err(anyhow::anyhow!(
                        "リリース件数には1以上の整数を指定してください: {}",
                        single
                    )),
                }
            }
            versions => Ok(RunMode::Versions(versions.to_vec())),
        }
    }
}
