// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::resources::{CATALOG, Section, section};
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    println!("Quit Vaping Resources: tools and support to help you succeed");
    for s in selected(m.get_one::<String>("section").map(String::as_str))? {
        println!("\n{}", s.title);
        let rows = s
            .items
            .iter()
            .map(|r| {
                let mut title = r.title.to_string();
                if r.recommended {
                    title.push_str(" ★ Recommended");
                }
                let mut desc = r.description.to_string();
                if let Some(c) = r.contact {
                    desc.push_str(&format!(" Contact: {}", c.trim_start_matches("mailto:")));
                }
                vec![title, desc]
            })
            .collect();
        println!("{}", pretty_table(&["Resource", "Details"], rows));
    }
    Ok(())
}

pub fn selected(name: Option<&str>) -> Result<Vec<&'static Section>> {
    match name {
        Some(n) => Ok(vec![section(n)?]),
        None => Ok(CATALOG.iter().collect()),
    }
}
