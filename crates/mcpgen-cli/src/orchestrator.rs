use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use mcpgen_core::config::ProxyConfig;
use mcpgen_core::parse;
use mcpgen_core::transform::{self, TransformOptions};
use mcpgen_core::{CodeGenerator, GeneratedFile};
use mcpgen_fastapi_proxy::FastapiProxyGenerator;

/// Load `input`, render every artifact, then write them under `output`.
///
/// Nothing is written unless loading and rendering both succeed. Returns the
/// paths written, in artifact order.
pub fn generate_server(input: &Path, output: &Path) -> Result<Vec<PathBuf>> {
    let spec = parse::load_spec(input)?;

    let generator = FastapiProxyGenerator;
    let options = TransformOptions {
        reserved: generator
            .reserved_identifiers()
            .iter()
            .map(|name| name.to_string())
            .collect(),
    };
    let ir = transform::transform_with_options(&spec, &options);
    log::info!(
        "{}: {} operation(s), base URL `{}`",
        input.display(),
        ir.operations.len(),
        ir.base_url
    );

    let files = generator.generate(&ir, &ProxyConfig::default())?;

    fs::create_dir_all(output)
        .with_context(|| format!("failed to create output directory {}", output.display()))?;
    write_files(output, &files)
}

/// Write generated files to disk under the given base directory.
fn write_files(base: &Path, files: &[GeneratedFile]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = base.join(&file.path);
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("  wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}
