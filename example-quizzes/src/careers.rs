//! A small career reference list matching the roles the sample scoring
//! service tends to return.

use vocatio::Career;

/// Build the sample career list.
pub fn careers() -> Vec<Career> {
    vec![
        Career {
            id: "backend-developer".into(),
            name_en: "Backend Developer".into(),
            name_th: "นักพัฒนาระบบหลังบ้าน".into(),
            alias: vec!["Backend Engineer".into(), "API Developer".into()],
            overview: "Designs and runs the services, data models and APIs behind a product."
                .into(),
            tags: vec!["services".into(), "databases".into(), "APIs".into()],
        },
        Career {
            id: "devops-engineer".into(),
            name_en: "DevOps Engineer".into(),
            name_th: "วิศวกรเดฟออปส์".into(),
            alias: vec!["Site Reliability Engineer".into(), "SRE".into()],
            overview: "Keeps delivery pipelines and production infrastructure healthy.".into(),
            tags: vec!["CI/CD".into(), "monitoring".into(), "cloud".into()],
        },
        Career {
            id: "data-analyst".into(),
            name_en: "Data Analyst".into(),
            name_th: "นักวิเคราะห์ข้อมูล".into(),
            alias: vec!["Business Analyst".into()],
            overview: "Turns raw data into answers stakeholders can act on.".into(),
            tags: vec!["SQL".into(), "visualization".into(), "statistics".into()],
        },
        Career {
            id: "ux-designer".into(),
            name_en: "UX Designer".into(),
            name_th: "นักออกแบบประสบการณ์ผู้ใช้".into(),
            alias: vec!["UI/UX Designer".into(), "Product Designer".into()],
            overview: "Shapes how a product feels, from flows to pixels.".into(),
            tags: vec!["design".into(), "research".into(), "prototyping".into()],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocatio::find_career;

    #[test]
    fn scorer_role_spellings_resolve() {
        let careers = careers();
        assert_eq!(
            find_career("backend developer", &careers).unwrap().id,
            "backend-developer"
        );
        assert_eq!(
            find_career("SRE", &careers).unwrap().id,
            "devops-engineer"
        );
        assert_eq!(
            find_career("UI/UX Designer", &careers).unwrap().id,
            "ux-designer"
        );
    }
}
