use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::persistence::storage_path::meta_store_path;
use crate::domain::get::dto::get_request::GetRequest;

#[derive(Parser, Debug)]
#[command(name = "metaview")]
#[command(author, version, about = "Inspect resources cached in an edge node's local metadata store")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Display one or many resources
    Get(GetArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct GetArgs {
    /// Resource type: pod, node, service, secret, configmap, endpoints or all
    pub resource_type: Option<String>,

    /// Only show resources whose key contains one of these names
    pub names: Vec<String>,

    /// Namespace to list resources from
    #[arg(short, long, default_value = "default")]
    pub namespace: String,

    /// Output format: json, yaml or wide (table when omitted)
    #[arg(short, long, default_value = "")]
    pub output: String,

    /// Label selector, e.g. `env=prod,tier!=cache`
    #[arg(short = 'l', long)]
    pub selector: Option<String>,

    /// Metadata snapshot to read (defaults to $METAVIEW_STORE_PATH, then
    /// /var/lib/kubeedge/meta.jsonl)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// List resources across all namespaces
    #[arg(short = 'A', long)]
    pub all_namespaces: bool,
}

impl From<GetArgs> for GetRequest {
    fn from(args: GetArgs) -> Self {
        GetRequest {
            resource_type: args.resource_type,
            names: args.names,
            namespace: args.namespace,
            output: args.output,
            selector: args.selector,
            input: args.input.unwrap_or_else(meta_store_path),
            all_namespaces: args.all_namespaces,
        }
    }
}
