//! Configuration schema definitions

use serde::{Deserialize, Serialize};

/// Source and output roots for one asset category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirMapping {
    /// Where the sources live
    pub source: String,

    /// Output root for development builds
    pub dev: String,

    /// Output root for production builds
    pub build: String,
}

impl DirMapping {
    fn new(source: &str, dev: &str, build: &str) -> Self {
        Self {
            source: source.to_string(),
            dev: dev.to_string(),
            build: build.to_string(),
        }
    }
}

/// Directory mapping for every asset category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirsConfig {
    #[serde(default = "default_script_dirs")]
    pub script: DirMapping,

    #[serde(default = "default_style_dirs")]
    pub style: DirMapping,

    #[serde(default = "default_wasm_dirs")]
    pub wasm: DirMapping,

    #[serde(default = "default_template_dirs")]
    pub template: DirMapping,
}

impl Default for DirsConfig {
    fn default() -> Self {
        Self {
            script: default_script_dirs(),
            style: default_style_dirs(),
            wasm: default_wasm_dirs(),
            template: default_template_dirs(),
        }
    }
}

impl DirsConfig {
    /// All categories with their names, in compile order
    pub fn categories(&self) -> [(&'static str, &DirMapping); 4] {
        [
            ("script", &self.script),
            ("style", &self.style),
            ("wasm", &self.wasm),
            ("template", &self.template),
        ]
    }
}

fn default_script_dirs() -> DirMapping {
    DirMapping::new("internal/ui/ts", "public/js", "dist/public/js")
}

fn default_style_dirs() -> DirMapping {
    DirMapping::new("internal/ui/css", "public/css", "dist/public/css")
}

fn default_wasm_dirs() -> DirMapping {
    DirMapping::new("internal/ui/wasm", "public/wasm", "dist/public/wasm")
}

fn default_template_dirs() -> DirMapping {
    DirMapping::new("internal/ui/pages", "internal/ui/view", "internal/ui/view")
}

/// External script bundler configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundlerConfig {
    /// Bundler executable, invoked as `<program> build ...`
    #[serde(default = "default_bundler_program")]
    pub program: String,
}

impl Default for BundlerConfig {
    fn default() -> Self {
        Self {
            program: default_bundler_program(),
        }
    }
}

fn default_bundler_program() -> String {
    "bun".to_string()
}

/// Project initialization settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitConfig {
    /// Module path of the template being renamed
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Identifier suggested by the prompt
    #[serde(default = "default_placeholder")]
    pub default_identifier: String,

    /// Manifest whose `name` field is rewritten
    #[serde(default = "default_manifest")]
    pub manifest: String,

    /// Module declaration file
    #[serde(default = "default_module_file")]
    pub module_file: String,

    /// Directory whose source files carry the placeholder import prefix
    #[serde(default = "default_internal_dir")]
    pub internal_dir: String,

    /// Extensions of the files rewritten under `internal_dir`
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,

    /// Package manager used for `install`
    #[serde(default = "default_package_manager")]
    pub package_manager: String,

    /// Dependency tidy command run after the module rewrite
    #[serde(default = "default_tidy")]
    pub tidy: Vec<String>,

    /// Message of the initial commit
    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    /// Branch merged by `merge upstream`
    #[serde(default = "default_upstream_branch")]
    pub upstream_branch: String,
}

impl Default for InitConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            default_identifier: default_placeholder(),
            manifest: default_manifest(),
            module_file: default_module_file(),
            internal_dir: default_internal_dir(),
            source_extensions: default_source_extensions(),
            package_manager: default_package_manager(),
            tidy: default_tidy(),
            commit_message: default_commit_message(),
            upstream_branch: default_upstream_branch(),
        }
    }
}

impl InitConfig {
    /// Import prefix the template's internal packages are imported under
    pub fn placeholder_prefix(&self) -> String {
        format!("{}/{}/", self.placeholder, self.internal_dir)
    }
}

fn default_placeholder() -> String {
    "donbarrigon/new".to_string()
}

fn default_manifest() -> String {
    "package.json".to_string()
}

fn default_module_file() -> String {
    "go.mod".to_string()
}

fn default_internal_dir() -> String {
    "internal".to_string()
}

fn default_source_extensions() -> Vec<String> {
    vec![".go".to_string()]
}

fn default_package_manager() -> String {
    "bun".to_string()
}

fn default_tidy() -> Vec<String> {
    vec!["go".to_string(), "mod".to_string(), "tidy".to_string()]
}

fn default_commit_message() -> String {
    "feat: initial commit from donbarrigon/new".to_string()
}

fn default_upstream_branch() -> String {
    "main".to_string()
}
