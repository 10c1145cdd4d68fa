// SPDX-FileCopyrightText: The verstr authors
// SPDX-License-Identifier: MPL-2.0

use super::*;

const CONF_TOML: &str = r#"
project = "verstr"
copyright = "The verstr authors"
author = "The verstr authors"
extensions = ["breathe"]
master_doc = "pages/index"
templates_path = ["res/templates"]
exclude_patterns = ["_build", "Thumbs.db", ".DS_Store"]
html_static_path = ["res/static"]
html_theme = "sphinx_rtd_theme"
html_title = "verstr"
html_logo = "res/static/img/logo.svg"
html_favicon = "res/static/img/favicon.png"
html_css_files = ["css/custom.css"]
breathe_default_project = "verstr"
pygments_style = "sphinx"

[html_theme_options]
collapse_navigation = true
navigation_depth = 4
logo_only = true

[html_sidebars]
"**" = ["globaltoc.html", "searchbox.html"]
"#;

#[test]
fn parse_all_fields() {
    let conf = DocsConfig::from_toml_str(CONF_TOML).unwrap();
    assert_eq!(Some("verstr"), conf.project.as_deref());
    assert_eq!(Some("The verstr authors"), conf.copyright.as_deref());
    assert_eq!(None, conf.version);
    assert_eq!(None, conf.release);
    assert_eq!(vec!["breathe"], conf.extensions);
    assert_eq!(Some("pages/index"), conf.master_doc.as_deref());
    assert_eq!(vec![PathBuf::from("res/templates")], conf.templates_path);
    assert_eq!(3, conf.exclude_patterns.len());
    assert_eq!(Some("sphinx_rtd_theme"), conf.html_theme.as_deref());
    assert_eq!(
        Some(&toml::Value::Integer(4)),
        conf.html_theme_options.get("navigation_depth")
    );
    assert_eq!(
        Some(Path::new("res/static/img/favicon.png")),
        conf.html_favicon.as_deref()
    );
    assert_eq!(vec!["css/custom.css"], conf.html_css_files);
    assert_eq!(
        Some(&vec!["globaltoc.html".to_owned(), "searchbox.html".to_owned()]),
        conf.html_sidebars.get("**")
    );
    assert_eq!(
        Some(&toml::Value::String("sphinx".to_owned())),
        conf.extra.get("pygments_style")
    );
}

#[test]
fn missing_fields_are_defaulted() {
    let conf = DocsConfig::from_toml_str(r#"project = "p""#).unwrap();
    assert_eq!(
        DocsConfig {
            project: Some("p".to_owned()),
            ..Default::default()
        },
        conf
    );
}

fn encoded_keys(conf: &DocsConfig) -> Vec<String> {
    conf.to_toml_string()
        .unwrap()
        .lines()
        .filter_map(|line| line.split_once(" = ").map(|(key, _)| key.to_owned()))
        .collect()
}

#[test]
fn missing_fields_are_not_encoded() {
    let mut conf = DocsConfig::from_toml_str("project = \"p\"\nbuilt = true").unwrap();
    assert_eq!(vec!["project", "built"], encoded_keys(&conf));
    conf.bind_version("v1.0.0");
    assert_eq!(
        vec!["project", "version", "release", "built"],
        encoded_keys(&conf)
    );
}

#[test]
fn malformed_input_is_rejected() {
    assert!(matches!(
        DocsConfig::from_toml_str("project = "),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        DocsConfig::from_toml_str("extensions = \"breathe\""),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn bind_version_only_modifies_version_and_release() {
    let orig = DocsConfig::from_toml_str(CONF_TOML).unwrap();
    let mut conf = orig.clone();
    conf.bind_version("v1.1.0dev_abcdef1 (2023-05-17)");
    assert_eq!(Some("v1.1.0dev_abcdef1 (2023-05-17)"), conf.version.as_deref());
    assert_eq!(conf.version, conf.release);
    assert_eq!(
        orig,
        DocsConfig {
            version: None,
            release: None,
            ..conf.clone()
        }
    );

    let encoded = conf.to_toml_string().unwrap();
    assert!(encoded.contains(r#"release = "v1.1.0dev_abcdef1 (2023-05-17)""#));
    assert_eq!(conf, DocsConfig::from_toml_str(&encoded).unwrap());
}

#[test]
fn load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conf.toml");
    fs::write(&path, CONF_TOML).unwrap();
    assert_eq!(
        DocsConfig::from_toml_str(CONF_TOML).unwrap(),
        DocsConfig::load(&path).unwrap()
    );
    assert!(matches!(
        DocsConfig::load(dir.path().join("missing.toml")),
        Err(ConfigError::Io { .. })
    ));
}
