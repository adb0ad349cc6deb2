//! The interrogator: the query surface over a signature catalog.

use crate::core::catalog::Catalog;
use crate::core::file_type::{normalize_token, FileTypeInfo, SignatureDefinition};
use crate::definitions::{self, DefinitionFormat, DefinitionSource};
use crate::error::{InterrogatorError, Result};
use crate::interrogate::config::InterrogatorConfig;
use crate::interrogate::disambiguator::AnchorIndex;
use crate::interrogate::io::{self, Sample};
use crate::interrogate::matcher::matches_indexed;
use crate::interrogate::sniffers::PathReport;
use crate::interrogate::text::TextClassifier;
use once_cell::sync::OnceCell;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::io::{Read, Seek};
use std::path::Path;
use tracing::{debug, trace};

static BUILTIN: OnceCell<Interrogator> = OnceCell::new();

/// Detects file types from leading bytes using an ordered signature catalog
/// and a plain-text fallback.
///
/// An interrogator is immutable after construction and can be shared freely
/// between threads.
#[derive(Debug, Clone)]
pub struct Interrogator {
    catalog: Catalog,
    text: TextClassifier,
    config: InterrogatorConfig,
}

impl Interrogator {
    /// Interrogator over `catalog` with the default configuration.
    pub fn new(catalog: Catalog) -> Self {
        let config = InterrogatorConfig::default();
        Self {
            catalog,
            text: TextClassifier::new(config.text.clone()),
            config,
        }
    }

    /// Interrogator over `catalog` with an explicit configuration.
    pub fn with_config(catalog: Catalog, config: InterrogatorConfig) -> Result<Self> {
        if config.sample.max_sample_size == 0 {
            return Err(InterrogatorError::InvalidArgument(
                "max_sample_size must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            catalog,
            text: TextClassifier::new(config.text.clone()),
            config,
        })
    }

    /// Build the catalog from `source` using the default configuration.
    pub fn from_source(source: &dyn DefinitionSource) -> Result<Self> {
        Self::from_source_with_config(source, InterrogatorConfig::default())
    }

    pub fn from_source_with_config(
        source: &dyn DefinitionSource,
        config: InterrogatorConfig,
    ) -> Result<Self> {
        let catalog = Catalog::from_source(source, &config.catalog)?;
        Self::with_config(catalog, config)
    }

    /// Build the catalog from a definition file. Files ending in `.json` are
    /// read as JSON, anything else as delimited records.
    pub fn from_definitions_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_definitions_path_with_config(path, InterrogatorConfig::default())
    }

    pub fn from_definitions_path_with_config<P: AsRef<Path>>(
        path: P,
        config: InterrogatorConfig,
    ) -> Result<Self> {
        let definitions = definitions::load_from_path(path)?;
        Self::from_source_with_config(&definitions, config)
    }

    pub fn from_definitions_reader<R: Read>(reader: R, format: DefinitionFormat) -> Result<Self> {
        Self::from_definitions_reader_with_config(reader, format, InterrogatorConfig::default())
    }

    pub fn from_definitions_reader_with_config<R: Read>(
        reader: R,
        format: DefinitionFormat,
        config: InterrogatorConfig,
    ) -> Result<Self> {
        let definitions = definitions::load_from_reader(reader, format)?;
        Self::from_source_with_config(&definitions, config)
    }

    /// The shared interrogator over the built-in definitions, built on first
    /// use.
    pub fn builtin() -> Result<&'static Interrogator> {
        BUILTIN.get_or_try_init(|| Self::from_source(&definitions::builtin()))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &InterrogatorConfig {
        &self.config
    }

    pub fn text_classifier(&self) -> &TextClassifier {
        &self.text
    }

    /// Detect the type of `buffer`.
    ///
    /// The first catalog entry that matches wins. When none does, the buffer
    /// is tried as ASCII or UTF-8 text. `Ok(None)` means nothing matched.
    pub fn detect_type(&self, buffer: &[u8]) -> Result<Option<&FileTypeInfo>> {
        if buffer.is_empty() {
            return Err(InterrogatorError::EmptyInput);
        }
        Ok(self.detect_sample(buffer, false))
    }

    /// Detect the type of a seekable stream from its first bytes.
    ///
    /// The stream is read from the start and its position is restored
    /// afterwards, also when reading fails.
    pub fn detect_stream<R: Read + Seek>(&self, stream: &mut R) -> Result<Option<&FileTypeInfo>> {
        let sample = io::sample_stream(stream, self.config.sample.max_sample_size)?;
        self.detect_read_sample(&sample)
    }

    /// Detect the type of a non-seekable stream from its next bytes.
    ///
    /// The reader is consumed past the sample.
    pub fn detect_reader<R: Read>(&self, reader: R) -> Result<Option<&FileTypeInfo>> {
        let sample = io::read_sample(reader, self.config.sample.max_sample_size)?;
        self.detect_read_sample(&sample)
    }

    /// Detect the type of the file at `path` from its first bytes.
    pub fn detect_path<P: AsRef<Path>>(&self, path: P) -> Result<Option<&FileTypeInfo>> {
        let sample = io::sample_file(path, self.config.sample.max_sample_size)?;
        self.detect_read_sample(&sample)
    }

    /// Detect the type of the file at `path` and compare it with the type its
    /// extension claims.
    pub fn inspect_path<P: AsRef<Path>>(&self, path: P) -> Result<PathReport> {
        let path = path.as_ref();
        let detected = self.detect_path(path)?.cloned();
        Ok(PathReport::new(path, detected, &self.catalog))
    }

    /// Detect a batch of buffers in parallel. Results keep input order.
    pub fn detect_many<B>(&self, buffers: &[B]) -> Vec<Result<Option<&FileTypeInfo>>>
    where
        B: AsRef<[u8]> + Sync,
    {
        buffers
            .par_iter()
            .map(|buffer| self.detect_type(buffer.as_ref()))
            .collect()
    }

    /// Whether `buffer` is of the type named by `token`.
    ///
    /// `token` is an extension, MIME type or alias, compared case-insensitively.
    /// Every catalog entry carrying the token is checked; text tokens are
    /// also accepted when the text classifier's result carries them. An empty
    /// buffer is never of any type.
    pub fn is_type(&self, buffer: &[u8], token: &str) -> bool {
        if buffer.is_empty() || normalize_token(token).is_empty() {
            return false;
        }

        let text_match = self.is_text_token(token)
            && match self.text.classify(buffer, false) {
                Some(kind) => {
                    self.catalog.is_placeholder_token(token)
                        || self.text.info(kind).matches_token(token)
                }
                None => false,
            };

        let mut index = AnchorIndex::new(buffer);
        let found = text_match
            || self
                .catalog
                .filter_token(token)
                .any(|definition| matches_indexed(&mut index, definition));
        trace!(token, found, "Type check");
        found
    }

    /// Extensions of all byte-matchable catalog entries.
    pub fn available_extensions(&self) -> BTreeSet<&str> {
        self.catalog.extensions()
    }

    /// MIME types of all byte-matchable catalog entries.
    pub fn available_mime_types(&self) -> BTreeSet<&str> {
        self.catalog.mime_types()
    }

    /// Byte-matchable catalog entries in priority order.
    pub fn available_types(&self) -> &[SignatureDefinition] {
        self.catalog.entries()
    }

    fn is_text_token(&self, token: &str) -> bool {
        self.catalog.is_placeholder_token(token) || self.text.is_text_token(token)
    }

    fn detect_read_sample(&self, sample: &Sample) -> Result<Option<&FileTypeInfo>> {
        if sample.is_empty() {
            return Err(InterrogatorError::EmptyInput);
        }
        Ok(self.detect_sample(&sample.data, sample.truncated))
    }

    fn detect_sample(&self, buffer: &[u8], truncated: bool) -> Option<&FileTypeInfo> {
        let mut index = AnchorIndex::new(buffer);
        if let Some(definition) = self
            .catalog
            .iter()
            .find(|definition| matches_indexed(&mut index, definition))
        {
            debug!(
                name = %definition.info.name,
                extension = %definition.info.extension,
                offset = definition.offset,
                "Signature matched"
            );
            return Some(&definition.info);
        }

        match self.text.classify(buffer, truncated) {
            Some(kind) => {
                debug!(%kind, bytes = buffer.len(), "Classified as text");
                Some(self.text.info(kind))
            }
            None => {
                debug!(bytes = buffer.len(), "No type detected");
                None
            }
        }
    }
}
