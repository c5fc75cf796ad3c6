//! Paginator and response assembler.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, Select};

use crate::server::search::{policy::SortDirection, request::SearchParamRequest};

/// One page of search results together with the paging parameters that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParamResponse<T> {
    pub items: Vec<T>,
    pub total_items: u64,
    pub total_pages: u64,
    pub page: u64,
    pub size: u64,
    pub sort: &'static str,
    pub direction: SortDirection,
    pub fold: bool,
}

impl<T> SearchParamResponse<T> {
    /// Converts every item while keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> SearchParamResponse<U> {
        SearchParamResponse {
            items: self.items.into_iter().map(f).collect(),
            total_items: self.total_items,
            total_pages: self.total_pages,
            page: self.page,
            size: self.size,
            sort: self.sort,
            direction: self.direction,
            fold: self.fold,
        }
    }

    /// Converts every item with a fallible conversion, stopping at the first error.
    pub fn try_map<U, Err>(
        self,
        f: impl FnMut(T) -> Result<U, Err>,
    ) -> Result<SearchParamResponse<U>, Err> {
        let items = self.items.into_iter().map(f).collect::<Result<Vec<_>, _>>()?;

        Ok(SearchParamResponse {
            items,
            total_items: self.total_items,
            total_pages: self.total_pages,
            page: self.page,
            size: self.size,
            sort: self.sort,
            direction: self.direction,
            fold: self.fold,
        })
    }
}

/// Runs the count and page queries for an already compiled `select`.
///
/// A page past the end yields no items; the count is still reported.
///
/// # Arguments
/// - `db` - Connection the queries run on
/// - `select` - Query produced by `predicate::build`
/// - `request` - Request supplying page, size and the echoed parameters
///
/// # Returns
/// - `Ok(SearchParamResponse)` - Items of the requested page and paging metadata
/// - `Err(DbErr)` - Database error during either query
pub async fn fetch_page<E, C>(
    db: &C,
    select: Select<E>,
    request: &SearchParamRequest,
) -> Result<SearchParamResponse<E::Model>, DbErr>
where
    E: EntityTrait,
    E::Model: Send + Sync,
    C: ConnectionTrait,
{
    let paginator = select.paginate(db, request.size);

    let total_items = paginator.num_items().await?;
    let total_pages = total_items.div_ceil(request.size);

    let items = if request.page < total_pages {
        paginator.fetch_page(request.page).await?
    } else {
        Vec::new()
    };

    Ok(SearchParamResponse {
        items,
        total_items,
        total_pages,
        page: request.page,
        size: request.size,
        sort: request.sort,
        direction: request.direction,
        fold: request.fold,
    })
}
