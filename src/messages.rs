//! User-facing messages.
//!
//! The administrators of this console read Korean; keep the wording as is.

pub const INVALID_QUANTITY: &str = "수량은 0 이상의 숫자이어야 합니다.";
pub const CONFIRM_DELETE: &str = "정말로 도서를 삭제하시겠습니까?";
pub const EMPTY_KEYWORD: &str = "키워드를 입력해주세요.";
pub const SEARCH_FAILED: &str =
    "네이버 도서 검색에 오류가 발생했습니다. 잠시 후에 다시 시도해주세요.";

/// Prefix of the diagnostic logged when a search request fails
pub const SEARCH_ERROR_LOG: &str = "search 오류 발생";

pub const LABEL_AUTHOR: &str = "저자: ";
pub const LABEL_PUBLISHER: &str = "출판사: ";
pub const LABEL_PUB_DATE: &str = "출판일: ";
pub const LABEL_ISBN: &str = "ISBN: ";
pub const SELECT: &str = "선택";

pub fn total_results(total: i64) -> String {
    format!("{}개의 검색 결과가 있습니다!", total)
}
