//! # Google ID 토큰 클레임 모델
//!
//! Google Identity Services 가 발급한 ID 토큰의 페이로드 중
//! 로그인/가입에 필요한 클레임만 매핑합니다.
//!
//! ```json
//! {
//!   "iss": "https://accounts.google.com",
//!   "aud": "1234.apps.googleusercontent.com",
//!   "sub": "110169484474386276334",
//!   "email": "alice@gmail.com",
//!   "email_verified": true,
//!   "name": "Alice Kim",
//!   "exp": 1735689600
//! }
//! ```

use serde::{Deserialize, Deserializer};

/// 서명 검증을 통과한 ID 토큰의 클레임
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleIdTokenClaims {
    /// Google 계정 고유 ID
    pub sub: String,

    #[serde(default)]
    pub email: Option<String>,

    /// 일부 발급 경로에서는 문자열 `"true"`로 내려옵니다
    #[serde(default, deserialize_with = "bool_or_string")]
    pub email_verified: bool,

    #[serde(default)]
    pub name: Option<String>,
}

/// 검증된 Google 사용자 신원
#[derive(Debug, Clone, PartialEq)]
pub struct GoogleIdentity {
    pub subject: String,
    pub email: String,
    pub email_verified: bool,
    pub name: Option<String>,
}

impl GoogleIdentity {
    /// 가입 시 사용할 표시 이름 (이름 클레임이 없으면 이메일)
    pub fn display_name(&self) -> String {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.email)
            .to_string()
    }
}

fn bool_or_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => value,
        Flag::Text(text) => text.eq_ignore_ascii_case("true"),
    })
}
