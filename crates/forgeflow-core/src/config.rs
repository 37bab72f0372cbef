//! ForgeFlow 実行設定
//!
//! デフォルト値は環境変数 `FORGE_*` で上書きできます。
//! テストではフィールドを直接差し替えてフェイクに向けられます。

/// 1回の実行で使う設定一式
#[derive(Debug, Clone)]
pub struct Config {
    /// レジストリ上のリポジトリ名（例: `chronistaclub/crystal`）
    pub repository: String,

    /// レジストリAPIのベースURL
    pub registry_api: String,

    /// 上流リリース元（`owner/name` 形式）
    pub upstream: String,

    /// リリースAPIのベースURL
    pub releases_api: String,

    /// マニフェスト作成時に参照するデフォルトアーキテクチャ一覧
    pub default_architectures: Vec<String>,

    /// このホストのアーキテクチャ（ユーザーは選択しない）
    pub local_architecture: String,

    /// docker build のコンテキストディレクトリ
    pub build_context: String,

    /// 実行後のイメージ掃除（prune）を省略する
    ///
    /// CIやテストなど、ホストのイメージに触れたくない環境で使う。
    pub skip_cleanup: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repository: "chronistaclub/crystal".to_string(),
            registry_api: "https://hub.docker.com/v2".to_string(),
            upstream: "crystal-lang/crystal".to_string(),
            releases_api: "https://api.github.com".to_string(),
            default_architectures: vec!["aarch64".to_string(), "x86_64".to_string()],
            local_architecture: std::env::consts::ARCH.to_string(),
            build_context: ".".to_string(),
            skip_cleanup: false,
        }
    }
}

impl Config {
    /// デフォルト値を環境変数で上書きした設定を返す
    ///
    /// - `FORGE_REPOSITORY` — レジストリのリポジトリ名
    /// - `FORGE_REGISTRY_API` — レジストリAPIベースURL
    /// - `FORGE_UPSTREAM` — 上流リリース元（owner/name）
    /// - `FORGE_RELEASES_API` — リリースAPIベースURL
    /// - `FORGE_ARCHITECTURES` — カンマ区切りのアーキテクチャ一覧
    /// - `FORGE_LOCAL_ARCH` — ホストアーキテクチャの上書き（テスト用）
    /// - `FORGE_SKIP_CLEANUP` — 設定されていればイメージ掃除を省略
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(repository) = std::env::var("FORGE_REPOSITORY") {
            config.repository = repository;
        }
        if let Ok(api) = std::env::var("FORGE_REGISTRY_API") {
            config.registry_api = api;
        }
        if let Ok(upstream) = std::env::var("FORGE_UPSTREAM") {
            config.upstream = upstream;
        }
        if let Ok(api) = std::env::var("FORGE_RELEASES_API") {
            config.releases_api = api;
        }
        if let Ok(archs) = std::env::var("FORGE_ARCHITECTURES") {
            let parsed: Vec<String> = archs
                .split(',')
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty())
                .collect();
            if !parsed.is_empty() {
                config.default_architectures = parsed;
            }
        }
        if let Ok(arch) = std::env::var("FORGE_LOCAL_ARCH") {
            config.local_architecture = arch;
        }
        config.skip_cleanup = std::env::var("FORGE_SKIP_CLEANUP").is_ok();

        tracing::debug!(
            repository = %config.repository,
            local_architecture = %config.local_architecture,
            "loaded config"
        );
        config
    }
}
