use crate::document::Document;
use crate::error::Result;
use crate::server::SearchServer;
use rayon::prelude::*;

/// Run independent queries on the rayon pool. Results keep the order of `queries`;
/// the first invalid query fails the whole batch.
pub fn process_queries<S>(server: &SearchServer, queries: &[S]) -> Result<Vec<Vec<Document>>>
where
    S: AsRef<str> + Sync,
{
    queries
        .par_iter()
        .map(|query| server.find_top_documents(query.as_ref()))
        .collect()
}

/// Like [`process_queries`] with the per-query results concatenated in query order.
pub fn process_queries_joined<S>(server: &SearchServer, queries: &[S]) -> Result<Vec<Document>>
where
    S: AsRef<str> + Sync,
{
    Ok(process_queries(server, queries)?.into_iter().flatten().collect())
}
