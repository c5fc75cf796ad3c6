use crate::{model::search::SearchResponseDto, server::search::page::SearchParamResponse};

impl<T> SearchParamResponse<T> {
    /// Converts the page into its wire form, converting each item with `f`.
    pub fn into_dto<U>(self, f: impl FnMut(T) -> U) -> SearchResponseDto<U> {
        let page = self.map(f);
        SearchResponseDto {
            items: page.items,
            total_items: page.total_items,
            total_pages: page.total_pages,
            page: page.page,
            size: page.size,
            sort: page.sort.to_string(),
            order: page.direction.to_string(),
            fold: page.fold,
        }
    }
}
