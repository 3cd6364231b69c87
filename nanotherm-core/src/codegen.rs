//! C Source Generation for Thermistor Tables
//!
//! Turns a [`ThermistorTable`] into the header/source pair the firmware
//! compiles in. For a table named `thermistor_ntc_100k_3950K`:
//!
//! ```text
//! thermistor_ntc_100k_3950K.h
//!   #ifndef THERMISTOR_NTC_100K_3950K_HEADER        include guard
//!   extern "C" { ... }                              under __cplusplus
//!   #include "thermistor.h"                         thermistor_data_t
//!   #define THERMISTOR_NTC_100K_3950K_SAMPLE_COUNT 10U
//!   extern const thermistor_data_t thermistor_ntc_100k_3950K_data;
//!
//! thermistor_ntc_100k_3950K.c
//!   #include "thermistor_ntc_100k_3950K.h"
//!   const thermistor_data_t thermistor_ntc_100k_3950K_data = {
//!       .data = { {-24, 1353}, ... },
//!       .unit = RESUNIT_KILOOHMS,
//!       .sample_count = THERMISTOR_NTC_100K_3950K_SAMPLE_COUNT
//!   };
//! ```
//!
//! Both files are rendered from the same table in one call, so the
//! `_SAMPLE_COUNT` macro always equals the number of rows in `.data`.

use alloc::{
    format,
    string::{String, ToString},
};

use crate::{
    constants::table::THERMISTOR_TYPES_HEADER,
    errors::{CodegenError, CodegenResult},
    table::ThermistorTable,
};

/// Rendered header and source for one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSources {
    name: String,
    sample_count: usize,
    header: String,
    source: String,
}

impl GeneratedSources {
    /// Render `table` under the symbol and file base name `name`
    ///
    /// `name` must be a C identifier; it prefixes every generated symbol.
    pub fn render(name: &str, table: &ThermistorTable) -> CodegenResult<Self> {
        if !is_c_identifier(name) {
            return Err(CodegenError::InvalidName(name.to_string()));
        }

        let sample_count = table.sample_count();
        Ok(Self {
            name: name.to_string(),
            sample_count,
            header: render_header(name, sample_count),
            source: render_source(name, table),
        })
    }

    /// Base name of both files and prefix of the symbols
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of the `<NAME>_SAMPLE_COUNT` macro
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Contents of `<name>.h`
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Contents of `<name>.c`
    pub fn source(&self) -> &str {
        &self.source
    }

    /// `<name>.h`
    pub fn header_file_name(&self) -> String {
        format!("{}.h", self.name)
    }

    /// `<name>.c`
    pub fn source_file_name(&self) -> String {
        format!("{}.c", self.name)
    }

    /// Write both files into `dir`, creating it if needed
    ///
    /// Returns the header and source paths.
    #[cfg(feature = "std")]
    pub fn write_to(
        &self,
        dir: impl AsRef<std::path::Path>,
    ) -> std::io::Result<(std::path::PathBuf, std::path::PathBuf)> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        let header_path = dir.join(self.header_file_name());
        std::fs::write(&header_path, &self.header)?;

        let source_path = dir.join(self.source_file_name());
        std::fs::write(&source_path, &self.source)?;

        Ok((header_path, source_path))
    }
}

/// True for `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn macro_prefix(name: &str) -> String {
    name.to_ascii_uppercase()
}

fn push_cplusplus_extern_begin(output: &mut String) {
    output.push_str("#ifdef __cplusplus\n");
    output.push_str("extern \"C\" {\n");
    output.push_str("#endif\n\n");
}

fn push_cplusplus_extern_end(output: &mut String) {
    output.push_str("#ifdef __cplusplus\n");
    output.push_str("}\n");
    output.push_str("#endif\n\n");
}

fn render_header(name: &str, sample_count: usize) -> String {
    let prefix = macro_prefix(name);
    let guard = format!("{}_HEADER", prefix);
    let mut output = String::new();

    output.push_str(&format!("#ifndef {}\n#define {}\n\n", guard, guard));
    push_cplusplus_extern_begin(&mut output);
    output.push_str(&format!("#include \"{}\"\n\n", THERMISTOR_TYPES_HEADER));
    output.push_str(&format!("#define {}_SAMPLE_COUNT {}U\n\n", prefix, sample_count));
    output.push_str(&format!("extern const thermistor_data_t {}_data;\n\n", name));
    push_cplusplus_extern_end(&mut output);
    output.push_str(&format!("#endif /* {} */\n", guard));

    output
}

fn render_source(name: &str, table: &ThermistorTable) -> String {
    let mut output = String::new();

    output.push_str(&format!("#include \"{}.h\"\n\n", name));
    output.push_str(&format!("const thermistor_data_t {}_data = {{\n", name));
    output.push_str("    .data = {\n");

    let rows = table.samples();
    for (i, sample) in rows.iter().enumerate() {
        output.push_str(&format!(
            "        {{{}, {}}}",
            sample.temperature, sample.resistance
        ));
        if i < rows.len() - 1 {
            output.push(',');
        }
        output.push('\n');
    }

    output.push_str("    },\n");
    output.push_str(&format!("    .unit = {},\n", table.unit().c_enumerator()));
    output.push_str(&format!(
        "    .sample_count = {}_SAMPLE_COUNT\n",
        macro_prefix(name)
    ));
    output.push_str("};\n");

    output
}
