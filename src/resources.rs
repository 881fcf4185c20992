// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Serialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Resource {
    pub title: &'static str,
    pub description: &'static str,
    pub contact: Option<&'static str>,
    pub recommended: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Section {
    pub key: &'static str,
    pub title: &'static str,
    pub items: &'static [Resource],
}

const fn item(title: &'static str, description: &'static str) -> Resource {
    Resource {
        title,
        description,
        contact: None,
        recommended: false,
    }
}

pub static CATALOG: &[Section] = &[
    Section {
        key: "programs",
        title: "Programs That Work",
        items: &[
            Resource {
                title: "Duke TTS Program",
                description: "Tobacco Treatment Specialists who have specialized training to help you quit.",
                contact: Some("mailto:cttsprogram@duke.edu"),
                recommended: true,
            },
            item(
                "Skip the Vape",
                "A program specifically designed for teens looking to quit vaping.",
            ),
            item(
                "Quit the Hit",
                "Resources for teens and young adults wanting to quit vaping.",
            ),
        ],
    },
    Section {
        key: "why-hard",
        title: "Why Quitting is Hard",
        items: &[
            item(
                "3%",
                "Success rate when quitting \"cold turkey\" without support.",
            ),
            item(
                "Flavors",
                "Flavored vapes, especially menthol, are designed to be extremely addictive.",
            ),
            item(
                "Unknowns",
                "Vapes are relatively new, so long-term effects are still being studied.",
            ),
        ],
    },
    Section {
        key: "strategies",
        title: "Effective Strategies",
        items: &[
            item(
                "Nicotine Replacement Therapy",
                "Options like patches, gum, and lozenges can help manage cravings.",
            ),
            item(
                "Medication Options",
                "Prescription medications like Varenicline and Bupropion can help reduce cravings and withdrawal symptoms.",
            ),
            item(
                "Oral Nicotine Resources",
                "Alternatives that can help manage cravings while breaking the habit.",
            ),
        ],
    },
];

/// Looks a section up by key or by its case-insensitive title.
pub fn section(name: &str) -> Result<&'static Section> {
    let needle = name.trim().to_lowercase();
    CATALOG
        .iter()
        .find(|s| s.key == needle || s.title.to_lowercase() == needle)
        .ok_or_else(|| Error::UnknownSection(name.trim().to_string()))
}
