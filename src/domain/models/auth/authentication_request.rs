/// 인증 모드를 정의하는 열거형
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AuthMode {
    /// 인증이 반드시 필요함 (없으면 로그인 페이지로 리디렉션)
    Required,
    /// 인증이 선택사항임 (있으면 검증, 없어도 허용)
    Optional,
}
