use mcpgen_core::config::ProxyConfig;
use mcpgen_core::ir::IrSpec;
use mcpgen_core::{CodeGenerator, GeneratedFile};

use crate::emitters;
use crate::error::GeneratorError;
use crate::python;

pub const SERVER_FILE: &str = "server.py";
pub const REQUIREMENTS_FILE: &str = "requirements.txt";
pub const README_FILE: &str = "README.md";
pub const SMOKE_TEST_FILE: &str = "test_endpoints.py";
pub const TOOLS_FILE: &str = "tools.json";
pub const RESOURCES_FILE: &str = "resources.json";

/// FastAPI proxy generator.
///
/// Every artifact is rendered before any is returned, so a failure leaves
/// nothing half-produced.
pub struct FastapiProxyGenerator;

impl CodeGenerator for FastapiProxyGenerator {
    type Config = ProxyConfig;
    type Error = GeneratorError;

    fn reserved_identifiers(&self) -> &[&'static str] {
        python::RESERVED
    }

    fn generate(
        &self,
        ir: &IrSpec,
        config: &ProxyConfig,
    ) -> Result<Vec<GeneratedFile>, GeneratorError> {
        let files = vec![
            GeneratedFile {
                path: SERVER_FILE.to_string(),
                content: emitters::server::emit_server(ir, config)?,
            },
            GeneratedFile {
                path: REQUIREMENTS_FILE.to_string(),
                content: emitters::scaffold::emit_requirements(),
            },
            GeneratedFile {
                path: README_FILE.to_string(),
                content: emitters::docs::emit_readme(ir, config)?,
            },
            GeneratedFile {
                path: SMOKE_TEST_FILE.to_string(),
                content: emitters::smoke_test::emit_smoke_test(ir, config)?,
            },
            GeneratedFile {
                path: TOOLS_FILE.to_string(),
                content: emitters::tools::emit_tools(ir)?,
            },
            GeneratedFile {
                path: RESOURCES_FILE.to_string(),
                content: emitters::resources::emit_resources(ir)?,
            },
        ];

        log::debug!("rendered {} file(s)", files.len());
        Ok(files)
    }
}
