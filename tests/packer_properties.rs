use std::sync::Arc;

use signlang_input::{
    BodyPart, ImageSize, Landmark, LandmarkList, LandmarkPacker, LandmarkStep, ModelInputStage,
    NullObserver, PackError,
};

fn packer() -> LandmarkPacker {
    LandmarkPacker::new().with_observer(Arc::new(NullObserver))
}

/// Distinct, NaN-free coordinates per part and index
fn landmarks_for(part: BodyPart) -> LandmarkList {
    (0..part.len())
        .map(|i| {
            let base = part as usize as f32 * 0.1;
            Landmark::new(base + i as f32 * 1e-3, base + 0.05, -(i as f32) * 1e-3)
        })
        .collect()
}

#[test]
fn every_presence_combination_packs_to_fixed_shape() {
    let lists: Vec<LandmarkList> = BodyPart::ALL.iter().map(|p| landmarks_for(*p)).collect();

    for mask in 0u8..16 {
        let mut step = LandmarkStep::default();
        for part in BodyPart::ALL {
            if mask & (1 << part as usize) != 0 {
                step.set_part(part, Some(lists[part as usize].clone()));
            }
        }

        let m = packer().process(&step).unwrap();
        assert_eq!(m.shape(), (3, 543), "mask {:04b}", mask);

        for part in BodyPart::ALL {
            let present = mask & (1 << part as usize) != 0;
            assert_eq!(m.is_part_present(part), present, "mask {:04b} part {}", mask, part);

            for (i, col) in part.columns().enumerate() {
                let c = m.column(col).unwrap();
                if present {
                    let lm = lists[part as usize].landmarks[i];
                    assert_eq!(c, lm.coords(), "mask {:04b} column {}", mask, col);
                } else {
                    assert!(c.iter().all(|v| v.is_nan()), "mask {:04b} column {}", mask, col);
                }
            }
        }
    }
}

#[test]
fn no_column_mixes_real_and_nan() {
    let step = LandmarkStep {
        face: Some(landmarks_for(BodyPart::Face)),
        pose: Some(landmarks_for(BodyPart::Pose)),
        ..Default::default()
    };
    let m = packer().process(&step).unwrap();
    for col in 0..543 {
        let c = m.column(col).unwrap();
        let nans = c.iter().filter(|v| v.is_nan()).count();
        assert!(nans == 0 || nans == 3, "column {} mixed: {:?}", col, c);
    }
}

#[test]
fn all_absent_is_entirely_nan() {
    let m = packer().process(&LandmarkStep::default()).unwrap();
    assert!(m.as_array().iter().all(|v| v.is_nan()));
}

#[test]
fn face_only_first_landmark() {
    let mut face = LandmarkList::filled(468, Landmark::new(0.5, 0.5, 0.0));
    face.landmarks[0] = Landmark::new(0.1, 0.2, 0.3);

    let m = packer().pack(Some(&face), None, None, None, None).unwrap();
    assert_eq!(m.column(0), Some([0.1, 0.2, 0.3]));
    for col in 468..543 {
        assert!(m.column(col).unwrap().iter().all(|v| v.is_nan()));
    }
}

#[test]
fn right_hand_only_last_landmark() {
    let mut rh = LandmarkList::filled(21, Landmark::new(0.5, 0.5, 0.0));
    rh.landmarks[20] = Landmark::new(0.9, 0.8, 0.0);

    let m = packer().pack(None, None, None, Some(&rh), None).unwrap();
    assert_eq!(m.column(542), Some([0.9, 0.8, 0.0]));
    for col in 0..522 {
        assert!(m.column(col).unwrap().iter().all(|v| v.is_nan()));
    }
}

#[test]
fn normalization_scales_around_center() {
    let mut pose = LandmarkList::filled(33, Landmark::new(0.5, 0.5, 0.0));
    pose.landmarks[0] = Landmark::new(0.6, 0.6, 0.0);

    let m = packer()
        .with_normalization(true)
        .pack(None, None, Some(&pose), None, Some(ImageSize::new(100, 50)))
        .unwrap();
    let [x, y, _] = m.column(489).unwrap();
    assert!((x - 0.6).abs() < 1e-6, "x: {}", x);
    assert!((y - 0.55).abs() < 1e-6, "y: {}", y);
}

#[test]
fn normalization_rejects_zero_geometry() {
    let result = packer()
        .with_normalization(true)
        .pack(None, None, None, None, Some(ImageSize::new(0, 0)));
    assert_eq!(result.unwrap_err(), PackError::InvalidGeometry { width: 0, height: 0 });
}

#[test]
fn step_from_json_packs() {
    let hand: Vec<String> = (0..21)
        .map(|i| format!(r#"{{"x": {}, "y": 0.5, "z": 0.0}}"#, i as f32 / 100.0))
        .collect();
    let json = format!(r#"{{"left_hand": [{}]}}"#, hand.join(","));

    let step = LandmarkStep::from_json_str(&json).unwrap();
    let m = packer().process(&step).unwrap();
    assert_eq!(m.present_parts(), vec![BodyPart::LeftHand]);
    assert_eq!(m.column(488), Some([0.2, 0.5, 0.0]));
}

#[test]
fn packer_is_shareable_across_threads() {
    let packer = Arc::new(packer());
    let handles: Vec<_> = BodyPart::ALL
        .into_iter()
        .map(|part| {
            let packer = Arc::clone(&packer);
            std::thread::spawn(move || {
                let mut step = LandmarkStep::default();
                step.set_part(part, Some(landmarks_for(part)));
                packer.process(&step).unwrap().present_parts()
            })
        })
        .collect();

    for (part, handle) in BodyPart::ALL.into_iter().zip(handles) {
        assert_eq!(handle.join().unwrap(), vec![part]);
    }
}
