//! Fixed sample researchers.
//!
//! Shown in place of live results when a search request fails, and as the
//! default "similar researchers" list.

use lab_core::entities::{ResearchItem, Researcher};

/// The three sample researchers, in display order.
#[must_use]
pub fn sample_researchers() -> Vec<Researcher> {
    vec![kim(), lee(), park()]
}

fn item(title: &str, equipment: &[&str], reagents: &[&str]) -> ResearchItem {
    ResearchItem::new(title)
        .with_equipment(equipment.iter().copied())
        .with_reagents(reagents.iter().copied())
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_string()).collect()
}

fn kim() -> Researcher {
    Researcher {
        user_id: "550e8400-e29b-41d4-a716-446655440000".into(),
        email: "kimresearch@snu.ac.kr".into(),
        name: "김연구".into(),
        affiliation: Some("서울대학교 의과대학".into()),
        google_scholar_id: Some("mzFEJVIAAAAJ".into()),
        profile_image_url: Some(
            "https://www.shutterstock.com/image-photo/japanese-scientist-working-research-facility-260nw-2591373147.jpg"
                .into(),
        ),
        created_at: Some("2024-01-15T09:00:00Z".into()),
        linkedin: Some("https://linkedin.com/in/researcher-kim".into()),
        current_interests: strings(&["AI 기반 신약 개발", "분자 동역학", "단백질 구조 예측"]),
        ongoing_research: vec![
            item(
                "신약 후보 물질 스크리닝 자동화",
                &["고성능 컴퓨팅 클러스터", "자동화된 분자 도킹 시스템", "마이크로플레이트 리더기"],
                &["표준 약물 라이브러리", "세포 배양 배지", "형광 표지 항체"],
            ),
            item(
                "AI 기반 약물 상호작용 예측",
                &["딥러닝 워크스테이션", "GPU 서버", "분자 시뮬레이션 소프트웨어"],
                &["단백질 데이터베이스", "약물-단백질 상호작용 데이터셋"],
            ),
        ],
        past_research: vec![
            item(
                "분자 동역학 시뮬레이션 최적화",
                &["고성능 컴퓨팅 클러스터", "분자 시뮬레이션 소프트웨어"],
                &["단백질 구조 데이터베이스", "시뮬레이션 파라미터 세트"],
            ),
            item(
                "QSAR 모델 개발",
                &["머신러닝 워크스테이션", "화학 구조 분석 소프트웨어"],
                &["화합물 데이터베이스", "분자 서술자 라이브러리"],
            ),
        ],
        papers: Vec::new(),
    }
}

fn lee() -> Researcher {
    Researcher {
        user_id: "550e8400-e29b-41d4-a716-446655440001".into(),
        email: "lee.bio@kaist.ac.kr".into(),
        name: "이바이오".into(),
        affiliation: Some("KAIST 생명과학과".into()),
        google_scholar_id: Some("kzABCDEAAAAJ".into()),
        profile_image_url: None,
        created_at: Some("2024-02-20T09:00:00Z".into()),
        linkedin: Some("https://linkedin.com/in/bio-lee".into()),
        current_interests: strings(&["유전체학", "시스템 생물학", "생물정보학"]),
        ongoing_research: vec![
            item(
                "단일세포 시퀀싱 분석",
                &["10x Genomics Chromium", "Illumina NovaSeq 6000", "세포 분류기"],
                &["단일세포 시퀀싱 키트", "세포 현탁액", "DNA 추출 키트"],
            ),
            item(
                "유전자 발현 네트워크 연구",
                &["RNA 시퀀서", "RT-PCR 기기", "세포 배양 인큐베이터"],
                &["RNA 추출 키트", "cDNA 합성 키트", "PCR 프라이머 세트"],
            ),
        ],
        past_research: vec![
            item(
                "암 유전체 분석",
                &["Illumina HiSeq 2500", "세포 분류기", "DNA 추출기"],
                &["암 세포 라인", "DNA 추출 키트", "시퀀싱 라이브러리"],
            ),
            item(
                "유전자 조절 네트워크 모델링",
                &["고성능 컴퓨팅 클러스터", "생물정보학 소프트웨어"],
                &["유전자 발현 데이터셋", "단백질 상호작용 데이터베이스"],
            ),
        ],
        papers: Vec::new(),
    }
}

fn park() -> Researcher {
    Researcher {
        user_id: "550e8400-e29b-41d4-a716-446655440002".into(),
        email: "park.health@yonsei.ac.kr".into(),
        name: "박헬스".into(),
        affiliation: Some("연세대학교 의공학과".into()),
        google_scholar_id: None,
        profile_image_url: None,
        created_at: Some("2024-03-01T09:00:00Z".into()),
        linkedin: None,
        current_interests: strings(&["디지털 헬스케어", "의료영상 분석", "웨어러블 디바이스"]),
        ongoing_research: vec![item(
            "실시간 건강 모니터링 시스템 개발",
            &["심전도 모니터", "혈압계", "활동량 측정기", "데이터 수집 서버"],
            &["전도 젤", "센서 패치", "보정용 표준 용액"],
        )],
        past_research: vec![
            item(
                "의료 영상 분할 알고리즘 개발",
                &["의료 영상 처리 워크스테이션", "딥러닝 GPU 서버"],
                &["의료 영상 데이터셋", "분할 알고리즘 라이브러리"],
            ),
            item(
                "생체신호 처리 연구",
                &["생체신호 증폭기", "데이터 수집 시스템", "신호 처리 소프트웨어"],
                &["전극 패드", "보정용 표준 신호", "필터링 알고리즘"],
            ),
        ],
        papers: Vec::new(),
    }
}
