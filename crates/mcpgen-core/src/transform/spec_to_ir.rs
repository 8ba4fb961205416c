use crate::ir::*;
use crate::parse::parameter::{Parameter, ParameterLocation};
use crate::parse::server::Server;
use crate::parse::spec::OpenApiDocument;

use super::enumerate::{EnumeratedOperation, iter_operations};
use super::sanitizer::{IdentifierAllocator, identifier_seed, sanitize};

/// Options controlling identifier allocation.
#[derive(Debug, Clone, Default)]
pub struct TransformOptions {
    /// Identifiers already bound by the target's emitted code. Operations and
    /// path-parameter arguments never receive one of these.
    pub reserved: Vec<String>,
}

/// Transform a loaded document into the emitter-facing IR.
pub fn transform(doc: &OpenApiDocument) -> IrSpec {
    transform_with_options(doc, &TransformOptions::default())
}

/// Transform with explicit options.
pub fn transform_with_options(doc: &OpenApiDocument, options: &TransformOptions) -> IrSpec {
    let mut identifiers = IdentifierAllocator::new(options.reserved.iter().cloned());

    let operations = iter_operations(doc)
        .map(|op| build_descriptor(op, &mut identifiers, &options.reserved))
        .collect::<Vec<_>>();

    log::debug!("enumerated {} operation(s)", operations.len());

    IrSpec {
        info: IrInfo {
            title: doc.info.title.clone(),
            version: doc.info.version.clone(),
        },
        base_url: doc.servers.first().map(base_url).unwrap_or_default(),
        operations,
    }
}

/// The server URL with variables set to their defaults and trailing `/` removed.
fn base_url(server: &Server) -> String {
    let bindings: Vec<(&str, &str)> = server
        .variables
        .iter()
        .map(|(name, var)| (name.as_str(), var.default.as_str()))
        .collect();
    PathTemplate::parse(&server.url)
        .substitute(&bindings)
        .trim_end_matches('/')
        .to_string()
}

fn build_descriptor(
    op: EnumeratedOperation<'_>,
    identifiers: &mut IdentifierAllocator,
    reserved: &[String],
) -> OperationDescriptor {
    let seed = identifier_seed(
        op.operation.operation_id.as_deref(),
        op.method.as_lower(),
        op.path,
    );
    let sanitized = sanitize(&seed);
    let identifier = identifiers.allocate(&sanitized);
    if identifier != sanitized {
        log::warn!(
            "{} {}: identifier `{sanitized}` already in use, renamed to `{identifier}`",
            op.method.as_str(),
            op.path
        );
    }

    let (path_params, forwarded_params) = split_parameters(&op.parameters, reserved);

    let descriptor = OperationDescriptor {
        identifier,
        method: op.method,
        path: op.path.to_string(),
        template: PathTemplate::parse(op.path),
        path_params,
        forwarded_params,
        summary: op.operation.summary,
        description: op.operation.description,
    };

    for name in descriptor.unbound_placeholders() {
        log::warn!(
            "{} {}: placeholder `{{{name}}}` has no declared path parameter, left as is",
            descriptor.method.as_str(),
            descriptor.path
        );
    }

    descriptor
}

fn split_parameters(
    params: &[Parameter],
    reserved: &[String],
) -> (Vec<PathParam>, Vec<ForwardedParam>) {
    let mut args = IdentifierAllocator::new(reserved.iter().cloned());
    let mut path_params = Vec::new();
    let mut forwarded = Vec::new();

    for param in params {
        match param.location {
            ParameterLocation::Path => {
                if path_params.iter().any(|p: &PathParam| p.name == param.name) {
                    continue;
                }
                path_params.push(PathParam {
                    name: param.name.clone(),
                    ident: args.allocate(&sanitize(&param.name)),
                    description: param.description.clone(),
                });
            }
            location => forwarded.push(ForwardedParam {
                name: param.name.clone(),
                location,
                required: param.required,
                description: param.description.clone(),
            }),
        }
    }

    (path_params, forwarded)
}
