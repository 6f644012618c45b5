// Unit tests for filter rules

use super::*;
use crate::domain::model::{AudioTracks, ClipRequest};

fn tracks(list: &[u32]) -> AudioTracks {
    list.iter().copied().collect()
}

#[test]
fn test_scale_filter_keeps_aspect() {
    assert_eq!(scale_filter(1280), "scale=1280:-2");
}

#[test]
fn test_simple_video_filter() {
    assert_eq!(simple_video_filter(Some(1280)).as_deref(), Some("scale=1280:-2"));
    assert_eq!(simple_video_filter(None), None);
}

#[test]
fn test_filter_graph_copy_two_tracks() {
    assert_eq!(
        filter_graph(None, &tracks(&[0, 1])),
        "[0:v:0]copy[vout];[0:a:0][0:a:1]amix=inputs=2[aout]"
    );
}

#[test]
fn test_filter_graph_scaled_single_track() {
    assert_eq!(
        filter_graph(Some(640), &tracks(&[3])),
        "[0:v:0]scale=640:-2[vout];[0:a:3]amix=inputs=1[aout]"
    );
}

#[test]
fn test_filter_graph_orders_tracks() {
    assert_eq!(
        filter_graph(None, &tracks(&[2, 0, 1])),
        "[0:v:0]copy[vout];[0:a:0][0:a:1][0:a:2]amix=inputs=3[aout]"
    );
}

#[test]
fn test_select_simple_without_tracks() {
    let request = ClipRequest::new("in.mp4").with_scale(1280);
    assert_eq!(
        FilterPath::select(&request),
        FilterPath::Simple {
            video_filter: Some("scale=1280:-2".to_string())
        }
    );
}

#[test]
fn test_select_simple_with_empty_track_list() {
    let request = ClipRequest::new("in.mp4").with_audio_tracks("".parse().unwrap());
    let path = FilterPath::select(&request);
    assert!(!path.is_complex());
    assert_eq!(path, FilterPath::Simple { video_filter: None });
}

#[test]
fn test_select_complex_with_tracks() {
    let request = ClipRequest::new("in.mp4").with_audio_tracks(tracks(&[0, 1]));
    let path = FilterPath::select(&request);
    assert!(path.is_complex());
    assert_eq!(
        path,
        FilterPath::Complex {
            graph: "[0:v:0]copy[vout];[0:a:0][0:a:1]amix=inputs=2[aout]".to_string()
        }
    );
}
