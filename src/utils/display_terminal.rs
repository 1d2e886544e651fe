//! 터미널 출력 포맷팅 유틸리티
//!
//! 서비스 초기화 과정과 서버 설정 요약을 사람이 읽기 쉬운 형태로 출력합니다.
//! 구조화된 로그는 `log` 매크로를 사용하고, 이 모듈은 시작 배너에만 사용합니다.

use crate::config::AppConfig;

const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║          🔄 INITIALIZING AUTH SERVICES           ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(BOX_WIDTH);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다 (`→ Step 1: Preparing user store`)
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다 (`✓ Step 1: User store ready (1 items)`)
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 서버 시작 직전 설정 요약을 출력합니다. 비밀값은 출력하지 않습니다.
pub fn print_startup_summary(config: &AppConfig, store_name: &str) {
    println!();
    print_boxed_title("🚀 USER AUTH BACKEND");
    println!("   🌍 Environment: {:?}", config.environment);
    println!("   🌐 Bind: http://{}", config.server.bind_address());
    println!("   🗄️  User store: {}", store_name);
    println!("   🔐 bcrypt cost: {}", config.password.bcrypt_cost);
    println!("   🍪 Secure cookie: {}", config.cookie.secure);
    println!("   ⏱️  Session: {} days", config.jwt.ttl_days);
    println!();
}
