use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Compile a JSON filter expression tree into a WHERE clause
    Compile {
        #[arg(long, help = "Filter document path, or '-' for stdin")]
        input: String,

        #[arg(long, help = "Compiler settings file (JSON)")]
        config: Option<String>,

        #[arg(long, help = "Reject trees nested deeper than this")]
        max_depth: Option<usize>,

        #[arg(
            long,
            help = "Print the clause, its parameters and collisions as JSON"
        )]
        json: bool,
    },
    /// Compile a JSON array of predicates into an AND-joined WHERE clause
    CompileAll {
        #[arg(long, help = "Predicate document path, or '-' for stdin")]
        input: String,

        #[arg(long, help = "Compiler settings file (JSON)")]
        config: Option<String>,

        #[arg(
            long,
            help = "Print the clause, its parameters and collisions as JSON"
        )]
        json: bool,
    },
    /// Show how a field path appears in a compiled clause
    Params {
        /// Dotted field path, e.g. "author.books.title"
        #[arg(long)]
        path: String,
    },
}
