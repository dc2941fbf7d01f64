use crate::notice_generation::domain::LicenseEntry;
use crate::ports::outbound::LicenseDictionary;
use spdx::LicenseId;

/// Risk class of a catalogued license, exposed as its tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LicenseClass {
    Permissive,
    WeakCopyleft,
    StrongCopyleft,
}

impl LicenseClass {
    fn tag(self) -> &'static str {
        match self {
            LicenseClass::Permissive => "permissive",
            LicenseClass::WeakCopyleft => "weak-copyleft",
            LicenseClass::StrongCopyleft => "strong-copyleft",
        }
    }
}

use LicenseClass::{Permissive, StrongCopyleft, WeakCopyleft};

/// Curated risk classes; other ids fall back to the SPDX list's flags
const CLASSES: &[(&str, LicenseClass)] = &[
    // Permissive
    ("MIT", Permissive),
    ("Apache-2.0", Permissive),
    ("BSD-2-Clause", Permissive),
    ("BSD-3-Clause", Permissive),
    ("ISC", Permissive),
    ("0BSD", Permissive),
    ("Unlicense", Permissive),
    ("Zlib", Permissive),
    ("BSD-4-Clause", Permissive),
    ("CC0-1.0", Permissive),
    ("CC-BY-3.0", Permissive),
    ("CC-BY-4.0", Permissive),
    ("WTFPL", Permissive),
    ("PSF-2.0", Permissive),
    ("Python-2.0", Permissive),
    ("MIT-0", Permissive),
    ("BlueOak-1.0.0", Permissive),
    ("BSL-1.0", Permissive),
    ("Artistic-2.0", Permissive),
    ("Unicode-DFS-2016", Permissive),
    ("Unicode-3.0", Permissive),
    // Weak copyleft
    ("LGPL-2.0-only", WeakCopyleft),
    ("LGPL-2.0-or-later", WeakCopyleft),
    ("LGPL-2.1-only", WeakCopyleft),
    ("LGPL-2.1-or-later", WeakCopyleft),
    ("LGPL-3.0-only", WeakCopyleft),
    ("LGPL-3.0-or-later", WeakCopyleft),
    ("MPL-2.0", WeakCopyleft),
    ("EPL-1.0", WeakCopyleft),
    ("EPL-2.0", WeakCopyleft),
    ("CDDL-1.0", WeakCopyleft),
    ("EUPL-1.2", WeakCopyleft),
    ("OSL-3.0", WeakCopyleft),
    ("APSL-2.0", WeakCopyleft),
    // Strong copyleft
    ("GPL-2.0-only", StrongCopyleft),
    ("GPL-2.0-or-later", StrongCopyleft),
    ("GPL-3.0-only", StrongCopyleft),
    ("GPL-3.0-or-later", StrongCopyleft),
    ("AGPL-3.0-only", StrongCopyleft),
    ("AGPL-3.0-or-later", StrongCopyleft),
    ("EUPL-1.1", StrongCopyleft),
];

fn class_of(id: LicenseId) -> Option<LicenseClass> {
    if let Some((_, class)) = CLASSES.iter().find(|(name, _)| *name == id.name) {
        return Some(*class);
    }
    if id.is_copyleft() {
        Some(WeakCopyleft)
    } else if id.is_osi_approved() {
        Some(Permissive)
    } else {
        None
    }
}

/// Maps common non-SPDX spellings and deprecated ids to SPDX identifiers
fn alias(name: &str) -> Option<&'static str> {
    let id = match name.trim() {
        "MIT License" | "The MIT License" | "MIT license" => "MIT",
        "Apache 2.0" | "Apache License 2.0" | "Apache License, Version 2.0" | "Apache-2" => {
            "Apache-2.0"
        }
        "BSD" | "BSD License" | "BSD 3-Clause" | "New BSD" | "Modified BSD" => "BSD-3-Clause",
        "BSD 2-Clause" | "Simplified BSD" | "FreeBSD" => "BSD-2-Clause",
        "ISC License" => "ISC",
        "GPL-2.0" | "GPLv2" | "GPL v2" | "GNU GPL v2" => "GPL-2.0-only",
        "GPL-3.0" | "GPLv3" | "GPL v3" | "GNU GPL v3" => "GPL-3.0-only",
        "LGPL-2.0" => "LGPL-2.0-only",
        "LGPL-2.1" | "LGPLv2.1" | "LGPL v2.1" => "LGPL-2.1-only",
        "LGPL-3.0" | "LGPLv3" | "LGPL v3" => "LGPL-3.0-only",
        "AGPL-3.0" | "AGPLv3" | "AGPL v3" => "AGPL-3.0-only",
        "MPL 2.0" | "Mozilla Public License 2.0" | "MPLv2" => "MPL-2.0",
        "CC0" | "Public Domain" => "CC0-1.0",
        "Boost Software License 1.0" => "BSL-1.0",
        _ => return None,
    };
    Some(id)
}

/// SpdxLicenseDictionary adapter backed by the SPDX license list
///
/// Resolves SPDX identifiers (known aliases, then exact, then
/// case-insensitive) to the canonical license text shipped with the list,
/// and tags each license with its risk class when one is known.
pub struct SpdxLicenseDictionary;

impl SpdxLicenseDictionary {
    pub fn new() -> Self {
        Self
    }

    fn find(name: &str) -> Option<LicenseId> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }

        alias(trimmed)
            .and_then(spdx::license_id)
            .or_else(|| spdx::license_id(trimmed))
            .or_else(|| {
                spdx::identifiers::LICENSES
                    .iter()
                    .find(|(id, ..)| id.eq_ignore_ascii_case(trimmed))
                    .and_then(|(id, ..)| spdx::license_id(id))
            })
    }
}

impl Default for SpdxLicenseDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl LicenseDictionary for SpdxLicenseDictionary {
    fn get(&self, name: &str) -> Option<LicenseEntry> {
        Self::find(name).map(|id| {
            let tags = class_of(id)
                .map(|class| vec![class.tag().to_string()])
                .unwrap_or_default();
            LicenseEntry::new(id.text(), tags)
        })
    }
}
