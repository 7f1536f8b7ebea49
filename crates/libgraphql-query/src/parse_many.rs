use crate::ast::Document;
use crate::GraphQLParseError;
use crate::GraphQLParser;
use rayon::prelude::IntoParallelRefIterator;
use rayon::prelude::ParallelIterator;

/// Parses several independent documents in parallel.
///
/// Each source gets its own parser, so a failure in one document has no
/// effect on the others. Results are returned in input order.
///
/// ```rust
/// let results = libgraphql_query::parse_many(&["{ a }", "{ b", "query Q { c }"]);
/// assert!(results[0].is_ok());
/// assert!(results[1].is_err());
/// assert!(results[2].is_ok());
/// ```
pub fn parse_many<S: AsRef<str> + Sync>(
    sources: &[S],
) -> Vec<Result<Document, GraphQLParseError>> {
    log::debug!("parsing {} document(s) in parallel", sources.len());
    sources
        .par_iter()
        .map(|source| GraphQLParser::new(source.as_ref()).parse_document())
        .collect()
}
