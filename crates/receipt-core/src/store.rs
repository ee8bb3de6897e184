//! Filesystem template store
//!
//! Three roots: base templates, intermediate templates, and final documents
//! nested by template name then year. Writes overwrite; a (template, year,
//! month) key maps to at most one file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::StoreConfig;
use crate::error::{Error, Result};

/// Name and full path of a generated final document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedDocument {
    pub file: String,
    pub path: PathBuf,
}

/// Paths and directory operations over the three template roots
#[derive(Debug, Clone)]
pub struct TemplateStore {
    config: StoreConfig,
}

impl TemplateStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn read_base(&self, name: &str) -> Result<String> {
        let path = self.config.base_dir.join(name);
        if !path.is_file() {
            return Err(Error::BaseTemplateNotFound(name.to_string()));
        }
        Ok(fs::read_to_string(path)?)
    }

    pub fn read_intermediate(&self, name: &str) -> Result<String> {
        let path = self.config.intermediate_dir.join(name);
        if !path.is_file() {
            return Err(Error::IntermediateTemplateNotFound(name.to_string()));
        }
        Ok(fs::read_to_string(path)?)
    }

    /// Write (or overwrite) an intermediate template.
    pub fn write_intermediate(&self, name: &str, content: &str) -> Result<()> {
        fs::write(self.config.intermediate_dir.join(name), content)?;
        Ok(())
    }

    /// Conventional name and path of a final document:
    /// `<final_root>/<template>/<year>/<template>_<MM>_<year>.html`.
    pub fn final_document(&self, template: &str, year: i32, month: u32) -> GeneratedDocument {
        let file = format!("{template}_{month:02}_{year}.html");
        let path = self
            .config
            .final_dir
            .join(template)
            .join(year.to_string())
            .join(&file);
        GeneratedDocument { file, path }
    }

    /// Write (or overwrite) a final document, creating the
    /// `<template>/<year>` directory if missing.
    pub fn write_final(
        &self,
        template: &str,
        year: i32,
        month: u32,
        content: &str,
    ) -> Result<GeneratedDocument> {
        let document = self.final_document(template, year, month);
        if let Some(parent) = document.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&document.path, content)?;
        Ok(document)
    }

    /// Look up a previously generated document by recomputing its
    /// conventional path. Checks existence only, never content.
    pub fn document_info(&self, template: &str, year: i32, month: u32) -> Result<GeneratedDocument> {
        let document = self.final_document(template, year, month);
        if !document.path.is_file() {
            return Err(Error::DocumentNotFound {
                template: template.to_string(),
                year,
                month,
            });
        }
        Ok(document)
    }

    pub fn list_base(&self) -> Result<Vec<String>> {
        list_regular_files(&self.config.base_dir)
    }

    pub fn list_intermediate(&self) -> Result<Vec<String>> {
        list_regular_files(&self.config.intermediate_dir)
    }
}

/// Names of regular files directly under `dir`, sorted. Subdirectories are
/// excluded, nothing is recursed into.
fn list_regular_files(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}
