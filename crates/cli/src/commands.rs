use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile a search query into a SQL condition and its bind parameters
    Compile {
        #[arg(long, help = "Search definition file path (JSON)")]
        definition: String,

        #[arg(long, help = "Search query; omitted or blank matches every row")]
        query: Option<String>,

        #[arg(
            long,
            help = "If specified, writes the JSON result to this file instead of stdout"
        )]
        output: Option<String>,
    },
    /// Print the parsed AST of a search query
    Ast {
        #[arg(long, help = "Search query")]
        query: String,
    },
    /// List the searchable fields of a definition
    Fields {
        #[arg(long, help = "Search definition file path (JSON)")]
        definition: String,
    },
}
