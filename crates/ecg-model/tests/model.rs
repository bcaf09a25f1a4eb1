//! Tests for ecg-model types.

use ecg_model::{
    AvClassification, AvConduction, ConductionBlock, DiagnosticRecord, EcgCase, Hypertrophy,
    Region, Rhythm, StAnalysis, StLocalization,
};

#[test]
fn labels_serialize_as_clinical_strings() {
    assert_eq!(
        serde_json::to_string(&ConductionBlock::Ivcd).unwrap(),
        "\"IVCD\""
    );
    assert_eq!(serde_json::to_string(&Hypertrophy::Rvh).unwrap(), "\"RVH\"");
    assert_eq!(
        serde_json::to_string(&Rhythm::JunctionalBradycardia).unwrap(),
        "\"Junctional bradycardia\""
    );
    assert_eq!(
        serde_json::to_string(&AvClassification::MobitzI).unwrap(),
        "\"Mobitz I (Wenckebach)\""
    );
    assert_eq!(serde_json::to_string(&Region::Inferior).unwrap(), "\"Inferior\"");
}

#[test]
fn display_matches_serialized_label() {
    for rhythm in [
        Rhythm::NormalSinus,
        Rhythm::SinusBradycardia,
        Rhythm::SinusArrhythmia,
        Rhythm::JunctionalBradycardia,
        Rhythm::SinusTachycardia,
        Rhythm::AtrialFibrillation,
        Rhythm::Svt,
        Rhythm::Unclassified,
    ] {
        let json = serde_json::to_string(&rhythm).unwrap();
        assert_eq!(json, format!("\"{rhythm}\""));
    }
    assert_eq!(AvClassification::ThirdDegree.to_string(), "3rd degree AV block");
}

#[test]
fn case_deserializes_with_absent_fields() {
    let case: EcgCase = serde_json::from_str(
        r#"{
            "heart_rate": 75,
            "rr_intervals": [800, 805],
            "qrs_duration": 100,
            "st_levels": {"V1": 0.1},
            "qrs_voltages": {"V1": 0.3}
        }"#,
    )
    .expect("deserialize case");

    assert_eq!(case.heart_rate, Some(75.0));
    assert_eq!(case.rr_intervals.as_deref(), Some(&[800.0, 805.0][..]));
    assert!(!case.has_av_features());
    assert!(case.pr_intervals.is_none());
    assert!(case.p_wave_presence());
}

#[test]
fn explicit_p_wave_absence_is_kept() {
    let case = EcgCase::new().with_p_wave_presence(false);
    assert!(!case.p_wave_presence());
}

#[test]
fn av_conduction_omits_unset_details() {
    let av = AvConduction {
        p_waves: 5,
        qrs_complexes: 4,
        missing_beats: 1,
        classification: AvClassification::MobitzII,
        pattern: Some("2:1".to_string()),
        pr_variation: Some("0.0ms".to_string()),
        ..AvConduction::default()
    };
    let json = serde_json::to_value(&av).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object["classification"], "Mobitz II");
    assert_eq!(object["pattern"], "2:1");
    assert!(!object.contains_key("pr_progression"));
    assert!(!object.contains_key("atrial_rate"));
}

fn quiet_record() -> DiagnosticRecord {
    DiagnosticRecord {
        st_analysis: StAnalysis::default(),
        av_conduction: Some(AvConduction {
            p_waves: 4,
            qrs_complexes: 4,
            ..AvConduction::default()
        }),
        conduction_abnormality: None,
        hypertrophy: None,
        rhythm: Rhythm::NormalSinus,
    }
}

#[test]
fn quiet_record_has_no_findings() {
    assert!(!quiet_record().has_findings());
}

#[test]
fn any_abnormality_counts_as_finding() {
    let mut record = quiet_record();
    record.st_analysis = StAnalysis {
        st_elevation: true,
        localization: Some(StLocalization {
            region: Region::Anterior,
            leads: vec!["V1".to_string(), "V2".to_string()],
            max_st_elev: 0.4,
        }),
        st_depression: false,
    };
    assert!(record.has_findings());

    let mut record = quiet_record();
    record.rhythm = Rhythm::SinusTachycardia;
    assert!(record.has_findings());

    let mut record = quiet_record();
    if let Some(av) = record.av_conduction.as_mut() {
        av.classification = AvClassification::HighGrade;
    }
    assert!(record.has_findings());
}

#[test]
fn record_round_trips_through_json() {
    let mut record = quiet_record();
    record.conduction_abnormality = Some(ConductionBlock::Lbbb);
    record.hypertrophy = Some(Hypertrophy::Lvh);
    let json = serde_json::to_string(&record).unwrap();
    let back: DiagnosticRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}
