//! Software versions installed on the station.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::StationPaths;
use crate::remote::{run_remote, RemoteSession};

const RECORD_PACKAGE: &str = "python-mssrecord";
const SUITE_PACKAGE: &str = "mss-suite";

/// Versions of the MSS software stack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Version of the system image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_version: Option<String>,

    /// Debian package version of python-mssrecord
    #[serde(
        rename = "python-mssrecord_version",
        skip_serializing_if = "Option::is_none"
    )]
    pub record_package_version: Option<String>,

    /// Debian package version of mss-suite
    #[serde(rename = "mss-suite_version", skip_serializing_if = "Option::is_none")]
    pub suite_package_version: Option<String>,

    /// Git tag the installed mss_record was built from
    #[serde(
        rename = "mss_record_git_tag",
        skip_serializing_if = "Option::is_none"
    )]
    pub record_git_tag: Option<String>,

    /// `__version__` of the installed mss_record package
    #[serde(
        rename = "mss_record_version",
        skip_serializing_if = "Option::is_none"
    )]
    pub record_version: Option<String>,
}

impl VersionInfo {
    /// Known values keyed by name.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let entries = [
            ("image_version", &self.image_version),
            ("python-mssrecord_version", &self.record_package_version),
            ("mss-suite_version", &self.suite_package_version),
            ("mss_record_git_tag", &self.record_git_tag),
            ("mss_record_version", &self.record_version),
        ];

        entries
            .into_iter()
            .filter_map(|(key, value)| value.as_ref().map(|v| (key.to_string(), v.clone())))
            .collect()
    }
}

/// Extract the package version from `apt show` output.
///
/// Uses the last line that starts with `version` (case-insensitive); the
/// value is everything after the first colon, lower-cased and trimmed.
/// Debian epochs are kept, so `Version: 1:2.0-3` yields `1:2.0-3` rather
/// than stopping at the second colon.
pub fn parse_package_version(lines: &[String]) -> Option<String> {
    lines
        .iter()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| l.starts_with("version"))
        .filter_map(|l| l.split_once(':').map(|(_, v)| v.trim().to_string()))
        .last()
}

/// Extract the value of a python assignment such as `__version__ = "0.5.2"`.
pub fn parse_assignment(line: &str) -> Option<String> {
    let (_, value) = line.split_once('=')?;
    Some(value.trim().replace('"', ""))
}

fn first_line_trimmed(session: &mut dyn RemoteSession, command: &str) -> Option<String> {
    let output = run_remote(session, command);
    output
        .first_line()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
}

fn package_version(session: &mut dyn RemoteSession, package: &str) -> Option<String> {
    let output = run_remote(session, &format!("apt show {}", package));
    let version = parse_package_version(&output.stdout);
    if version.is_none() {
        tracing::error!("No version found for package {}.", package);
    }
    version
}

fn assignment_from(session: &mut dyn RemoteSession, command: &str) -> Option<String> {
    let output = run_remote(session, command);
    let value = output.first_line().and_then(parse_assignment);
    if value.is_none() {
        tracing::error!("No version assignment in the output of '{}'.", command);
    }
    value
}

/// Read `__version__` of the installed mss_record package.
pub fn read_record_version(session: &mut dyn RemoteSession, paths: &StationPaths) -> Option<String> {
    assignment_from(
        session,
        &format!(
            "cat {}/__init__.py | grep __version__",
            paths.record_package_dir
        ),
    )
}

/// Gather version information of the MSS software.
pub fn get_version_info(session: &mut dyn RemoteSession, paths: &StationPaths) -> VersionInfo {
    tracing::info!("Gathering MSS software version information.");

    let image_version = first_line_trimmed(session, &format!("cat {}", paths.image_version_file));
    if image_version.is_none() {
        tracing::error!("Cannot read the image version from {}.", paths.image_version_file);
    }

    let record_package_version = package_version(session, RECORD_PACKAGE);
    let suite_package_version = package_version(session, SUITE_PACKAGE);
    let record_git_tag = assignment_from(
        session,
        &format!("cat {}/version.py", paths.record_package_dir),
    );
    let record_version = read_record_version(session, paths);

    VersionInfo {
        image_version,
        record_package_version,
        suite_package_version,
        record_git_tag,
        record_version,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::MockSession;

    const APT_SHOW: &str = "Package: python-mssrecord
Version: 0.5.2-1
Priority: optional
Section: python
Maintainer: Stefan Mertl
Description: MSS recording software
";

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(String::from).collect()
    }

    #[test]
    fn package_version_from_apt_show() {
        assert_eq!(
            parse_package_version(&lines(APT_SHOW)).as_deref(),
            Some("0.5.2-1")
        );
    }

    #[test]
    fn package_version_keeps_epoch() {
        assert_eq!(
            parse_package_version(&lines("Version: 1:2.0-3")).as_deref(),
            Some("1:2.0-3")
        );
    }

    #[test]
    fn package_version_missing() {
        assert_eq!(parse_package_version(&lines("Package: foo\n")), None);
        assert_eq!(parse_package_version(&[]), None);
    }

    #[test]
    fn assignment_strips_quotes() {
        assert_eq!(
            parse_assignment("__version__ = \"0.5.2\"").as_deref(),
            Some("0.5.2")
        );
        assert_eq!(
            parse_assignment("__git_tag__=\"v0.5.2-3-gabc123\"").as_deref(),
            Some("v0.5.2-3-gabc123")
        );
    }

    #[test]
    fn assignment_without_equals_is_none() {
        assert_eq!(parse_assignment("0.5.2"), None);
    }

    #[test]
    fn gathers_all_versions() {
        let mut session = MockSession::new()
            .with_stdout("cat /etc/mss_image_version", "mss-image-2022.03\n")
            .with_stdout("apt show python-mssrecord", APT_SHOW)
            .with_stdout("apt show mss-suite", "Package: mss-suite\nVersion: 1.1.0\n")
            .with_stdout(
                "cat /usr/lib/python3/dist-packages/mss_record/version.py",
                "__git_tag__ = \"v0.5.2\"\n",
            )
            .with_stdout(
                "cat /usr/lib/python3/dist-packages/mss_record/__init__.py | grep __version__",
                "__version__ = \"0.5.2\"\n",
            );

        let info = get_version_info(&mut session, &StationPaths::default());

        assert_eq!(info.image_version.as_deref(), Some("mss-image-2022.03"));
        assert_eq!(info.record_package_version.as_deref(), Some("0.5.2-1"));
        assert_eq!(info.suite_package_version.as_deref(), Some("1.1.0"));
        assert_eq!(info.record_git_tag.as_deref(), Some("v0.5.2"));
        assert_eq!(info.record_version.as_deref(), Some("0.5.2"));
        assert_eq!(session.commands().len(), 5);
    }

    #[test]
    fn missing_values_stay_unset() {
        let mut session = MockSession::new();
        let info = get_version_info(&mut session, &StationPaths::default());
        assert_eq!(info, VersionInfo::default());
        assert!(info.to_map().is_empty());
    }

    #[test]
    fn map_and_json_use_original_keys() {
        let info = VersionInfo {
            image_version: Some("img-1".to_string()),
            record_package_version: Some("0.5.2-1".to_string()),
            ..Default::default()
        };

        let map = info.to_map();
        assert_eq!(map.get("image_version").map(String::as_str), Some("img-1"));
        assert_eq!(
            map.get("python-mssrecord_version").map(String::as_str),
            Some("0.5.2-1")
        );

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["python-mssrecord_version"], "0.5.2-1");
        assert!(json.get("mss-suite_version").is_none());
    }
}
