//! 인증 요청관련 DTO
//!
//! 회원가입, 로그인, Google 로그인 요청 본문을 매핑합니다.
//! 형식 검증(이메일 형식, 비밀번호 강도)은 하지 않고 필수 필드 존재 여부만 확인합니다.
use serde::Deserialize;
use validator::Validate;

/// 회원가입 요청 구조체
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "role is required"))]
    pub role: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// 로컬 로그인 요청 구조체
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Google 로그인 요청 구조체
///
/// `token`은 Google Identity Services 가 발급한 ID 토큰입니다.
#[derive(Debug, Deserialize)]
pub struct OAuthRequest {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_requires_every_field() {
        let request: SignupRequest = serde_json::from_value(serde_json::json!({
            "name": "A",
            "email": "a@x.com",
            "role": "",
            "password": "p1"
        }))
        .unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("role"));
        assert_eq!(errors.field_errors().len(), 1);
    }

    #[test]
    fn test_signup_request_accepts_any_email_shape() {
        let request: SignupRequest = serde_json::from_value(serde_json::json!({
            "name": "A",
            "email": "not-an-email",
            "role": "Consumer",
            "password": "p1"
        }))
        .unwrap();

        assert!(request.validate().is_ok());
    }
}
