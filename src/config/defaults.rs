// src/config/defaults.rs

//! Built-in configuration used when no config file overrides it.

pub const DEFAULT_TARGET_DIRECTORY: &str = "./your_project_root";

pub const DEFAULT_OUTPUT_MARKDOWN_PATH: &str = "./output/project.md";

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "Treedoc.toml";

/// Paths hidden from both the tree and the content sections.
pub const DEFAULT_IGNORED_PATHS: &[&str] = &[
    // general
    ".DS_Store",
    ".git/",
    ".vscode/",
    ".idea/",
    ".project",
    ".classpath",
    ".settings/",
    "Thumbs.db",
    "*.log",
    "*.tmp",
    "temp/",
    "dist/",
    "pnpm-lock.yaml",
    "fonts/",
    // javascript / typescript
    "node_modules/",
    "package-lock.json",
    "yarn.lock",
    "build/",
    ".parcel-cache/",
    "coverage/",
    "*.map",
    "*.tsbuildinfo",
    ".svelte-kit/",
    ".next/",
    ".nuxt/",
    "uni_modules/",
    "unpackage/",
    "wxcomponents/",
    // java / maven
    "target/",
    ".flattened-pom.xml",
    "*.iml",
    ".mvn/",
    "**/__Javadoc.json",
    "**/generated-sources/",
    "**/generated-test-sources/",
    "**/target/classes/META-INF/",
    "**/target/maven-archiver/",
    "**/target/maven-status/",
    // python
    "__pycache__/",
    "venv/",
    "env/",
    "*.pyc",
    "*.pyd",
    "*.so",
    ".pytest_cache/",
    "*.egg-info/",
    ".mypy_cache/",
    ".ipynb_checkpoints/",
    "htmlcov/",
    "poetry.lock",
    "Pipfile.lock",
    // static assets
    "static/",
    // project specific
    "FlowAI.xcodeproj/",
    "README.md",
    "tinymce/",
    "views/",
];

/// Paths listed in the tree but whose content is redacted.
pub const DEFAULT_IGNORED_CONTENT_PATHS: &[&str] = &[
    // archives
    "*.jar",
    "*.zip",
    "*.rar",
    "*.gz",
    "*.tar",
    "*.vscodeignore",
    ".gitignore",
    "pingfang/",
    "m3e/",
    "ner_model_bert/",
    // images
    "*.jpg",
    "*.jpeg",
    "*.png",
    "*.gif",
    "*.bmp",
    "*.ico",
    "*.webp",
    "*.svg",
    "*.avif",
    // build / tooling files
    "Cargo.lock",
    "schemas/",
    "*.icns",
    "pom.xml",
    "hei-normal.js",
    "auto-imports.d.ts",
    "components.d.ts",
    "gradle.properties",
    "build.gradle",
    "settings.gradle",
    "tsconfig.json",
    "webpack.config.js",
    "rollup.config.js",
    "babel.config.js",
    "tailwind.config.js",
    "next.config.js",
    "nuxt.config.js",
    "pyproject.toml",
    "requirements.txt",
    "Pipfile",
    "Procfile",
    ".env",
    "*.env",
    "uploads/",
    // secrets and large data
    "big_data_file.txt",
    "credentials.json",
    "*.key",
    "*.pem",
    "*.crt",
    "*.jks",
    "演示使用自行删除/",
];

pub fn default_ignored_paths() -> Vec<String> {
    DEFAULT_IGNORED_PATHS.iter().map(|s| s.to_string()).collect()
}

pub fn default_ignored_content_paths() -> Vec<String> {
    DEFAULT_IGNORED_CONTENT_PATHS
        .iter()
        .map(|s| s.to_string())
        .collect()
}
