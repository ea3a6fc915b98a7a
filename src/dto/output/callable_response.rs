use serde::Serialize;

#[derive(Serialize)]
pub struct CallableResponse<T> {
    pub result: T,
}
