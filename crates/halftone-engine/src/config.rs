//! Pipeline schema configuration and validation.
//!
//! [`PaintSchema`] names the host fields the pipeline reads and writes,
//! plus the literals that drive classification and tagging.
//! [`validate()`](PaintSchema::validate) checks structural invariants
//! before a [`Painter`](crate::paint::Painter) is constructed.

use std::error::Error;
use std::fmt;

// ── PaintSchema ────────────────────────────────────────────────────

/// Field names and literals the pipeline operates on.
///
/// The `Default` construction carries the production parameter names of
/// the original deployment; hosts with a different parameter vocabulary
/// override individual fields.
///
/// # Examples
///
/// ```
/// use halftone_engine::PaintSchema;
///
/// let schema = PaintSchema::default();
/// assert_eq!(schema.zone_field, "ROM_Зона");
/// assert!(schema.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaintSchema {
    /// Field holding the zone name (grouping key and family marker).
    pub zone_field: String,
    /// Field holding the level name (outermost grouping key).
    pub level_field: String,
    /// Field holding the block name.
    pub block_field: String,
    /// Field holding the sub-zone name (innermost grouping scope).
    pub sub_zone_field: String,
    /// Read-only field holding the calculated sub-zone id the shading
    /// value is derived from.
    pub calc_sub_zone_id_field: String,
    /// Write target for the derived shading value.
    pub sub_zone_index_field: String,
    /// Substring of the zone field identifying the apartment family;
    /// records without it are excluded from the run entirely.
    pub apartment_marker: String,
    /// Literal appended to the calculated sub-zone id to form the
    /// shading value.
    pub color_suffix: String,
    /// Transaction name handed to the host's undo history.
    pub transaction_name: String,
    /// Title for the operator-facing error dialog.
    pub error_title: String,
}

impl Default for PaintSchema {
    fn default() -> Self {
        Self {
            zone_field: "ROM_Зона".into(),
            level_field: "Level".into(),
            block_field: "BS_Блок".into(),
            sub_zone_field: "ROM_Подзона".into(),
            calc_sub_zone_id_field: "ROM_Расчетная_подзона_ID".into(),
            sub_zone_index_field: "ROM_Подзона_Index".into(),
            apartment_marker: "Квартира".into(),
            color_suffix: ".Полутон".into(),
            transaction_name: "FillColorTransaction".into(),
            error_title: "Error".into(),
        }
    }
}

impl PaintSchema {
    /// Check structural invariants of the schema.
    ///
    /// Returns the first violation found. A schema whose write target
    /// aliases its read source would compound the suffix on every run,
    /// so that combination is rejected up front.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let fields = [
            ("zone_field", &self.zone_field),
            ("level_field", &self.level_field),
            ("block_field", &self.block_field),
            ("sub_zone_field", &self.sub_zone_field),
            ("calc_sub_zone_id_field", &self.calc_sub_zone_id_field),
            ("sub_zone_index_field", &self.sub_zone_index_field),
        ];
        for (which, value) in fields {
            if value.is_empty() {
                return Err(SchemaError::EmptyFieldName { which });
            }
        }
        if self.sub_zone_index_field == self.calc_sub_zone_id_field {
            return Err(SchemaError::WriteAliasesSource);
        }
        if self.apartment_marker.is_empty() {
            return Err(SchemaError::EmptyMarker);
        }
        if self.color_suffix.is_empty() {
            return Err(SchemaError::EmptySuffix);
        }
        Ok(())
    }
}

// ── SchemaError ────────────────────────────────────────────────────

/// Errors detected during [`PaintSchema::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemaError {
    /// A field-name entry is empty.
    EmptyFieldName {
        /// Which schema entry was empty.
        which: &'static str,
    },
    /// The write target equals the calculated-id source field, which
    /// would append the suffix again on every rerun.
    WriteAliasesSource,
    /// The apartment-family marker is empty and would match every record.
    EmptyMarker,
    /// The color suffix is empty and the mutation would be a no-op tag.
    EmptySuffix,
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFieldName { which } => write!(f, "schema entry '{which}' is empty"),
            Self::WriteAliasesSource => {
                write!(f, "sub_zone_index_field aliases calc_sub_zone_id_field")
            }
            Self::EmptyMarker => write!(f, "apartment_marker is empty"),
            Self::EmptySuffix => write!(f, "color_suffix is empty"),
        }
    }
}

impl Error for SchemaError {}
