use std::sync::{Arc, OnceLock};
use regex::Regex;
use serde::{Serialize, Deserialize};

/// A license gating one or more candidates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct License {
	/// XML style reference, in practice looks like `[oem-]android-[type]-license`.
	#[serde(rename = "ref")]
	pub license_ref: String,
	#[serde(default)]
	pub text: String,
}

impl License {
	pub fn new(license_ref: impl Into<String>, text: impl Into<String>) -> Self {
		Self {
			license_ref: license_ref.into(),
			text: text.into(),
		}
	}
}

/// Key license groups are formed and ordered by.
///
/// `NoLicense` is declared first so it sorts before every named key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LicenseKey {
	NoLicense,
	/// Holds the rendered license reference.
	Named(String),
}

impl LicenseKey {
	pub fn for_license(license: Option<&License>) -> Self {
		match license {
			Some(l) if !l.text.is_empty() => LicenseKey::Named(pretty_license_ref(&l.license_ref)),
			_ => LicenseKey::NoLicense,
		}
	}
}

impl std::fmt::Display for LicenseKey {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			LicenseKey::NoLicense => write!(f, "No license"),
			LicenseKey::Named(name) => write!(f, "{}", name),
		}
	}
}

fn acronyms() -> &'static Regex {
	static ACRONYMS: OnceLock<Regex> = OnceLock::new();
	ACRONYMS.get_or_init(|| Regex::new("Sdk|Mips|Arm").expect("acronym pattern should compile."))
}

/// Reformats a license reference to be more human readable.
///
/// Every lowercase letter following a non-lowercase character is capitalized, dashes become spaces
/// and the acronyms `SDK`, `MIPS` and `ARM` are upper-cased wherever they appear.
pub fn pretty_license_ref(license_ref: &str) -> String {
	let mut capitalize = true;
	let words: String = license_ref.chars().map(|c| {
		if c.is_ascii_lowercase() {
			if capitalize {
				capitalize = false;
				c.to_ascii_uppercase()
			} else {
				c
			}
		} else {
			capitalize = true;
			if c == '-' { ' ' } else { c }
		}
	}).collect();

	acronyms().replace_all(&words, |caps: &regex::Captures| caps[0].to_uppercase()).into_owned()
}

/// Two candidates carry the same license when they share the license object, or failing that when the licenses are equal.
pub fn is_same_license(lhs: Option<&Arc<License>>, rhs: Option<&Arc<License>>) -> bool {
	match (lhs, rhs) {
		(None, None) => true,
		(Some(l), Some(r)) => Arc::ptr_eq(l, r) || l == r,
		_ => false,
	}
}
