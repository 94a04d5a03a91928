use approx::assert_relative_eq;
use scrobble_timeline::api::TimelineConfig;
use scrobble_timeline::core::{
    ColorMapper, ColorValueFactors, HighlightContext, HighlightFactors, Hsl, SequentialColorScale,
};

fn factors() -> HighlightFactors {
    HighlightFactors {
        genre: ColorValueFactors::new(1.4, 1.25),
        artist: ColorValueFactors::new(1.6, 1.5),
        other: ColorValueFactors::new(0.6, 0.7),
    }
}

fn mapper() -> ColorMapper {
    ColorMapper::new(
        11,
        [("Rock", [Hsl::new(0.0, 0.5, 0.4), Hsl::new(20.0, 0.7, 0.6)])],
        [Hsl::new(0.0, 0.0, 0.2), Hsl::new(0.0, 0.0, 0.6)],
        factors(),
    )
}

#[test]
fn sequential_scale_interpolates_between_stops() {
    let scale = SequentialColorScale::new(11, [Hsl::new(0.0, 0.5, 0.4), Hsl::new(20.0, 0.7, 0.6)]);

    let low = scale.color(1);
    let mid = scale.color(6);
    let high = scale.color(50);

    assert_relative_eq!(low.h, 0.0, epsilon = 1e-9);
    assert_relative_eq!(mid.h, 10.0, epsilon = 1e-9);
    assert_relative_eq!(mid.s, 0.6, epsilon = 1e-9);
    assert_relative_eq!(high.l, 0.6, epsilon = 1e-9);
}

#[test]
fn known_group_uses_group_scale_with_context_factors() {
    let mapper = mapper();
    let color = mapper.color_for(Some("Rock"), 6, HighlightContext::Default);

    assert_relative_eq!(color.h, 10.0, epsilon = 1e-9);
    assert_relative_eq!(color.s, 0.6 * 0.6, epsilon = 1e-9);
    assert_relative_eq!(color.l, 0.5 * 0.7, epsilon = 1e-9);
}

#[test]
fn unknown_or_missing_group_falls_back_to_neutral_scale() {
    let mapper = mapper();
    let unknown = mapper.color_for(Some("Polka"), 1, HighlightContext::Default);
    let missing = mapper.color_for(None, 1, HighlightContext::Default);

    assert_eq!(unknown, missing);
    assert_relative_eq!(missing.s, 0.0, epsilon = 1e-9);
    assert_relative_eq!(missing.l, 0.2 * 0.7, epsilon = 1e-9);
}

#[test]
fn highlight_contexts_are_clamped_into_unit_range() {
    let mapper = mapper();
    for context in [
        HighlightContext::GenreHighlighted,
        HighlightContext::ArtistSelected,
        HighlightContext::Default,
    ] {
        let color = mapper.color_for(Some("Rock"), 11, context);
        assert!((0.0..=1.0).contains(&color.s));
        assert!((0.0..=1.0).contains(&color.l));
    }

    let artist = mapper.color_for(Some("Rock"), 11, HighlightContext::ArtistSelected);
    assert_relative_eq!(artist.s, 1.0, epsilon = 1e-9);
    assert_relative_eq!(artist.l, 0.9, epsilon = 1e-9);
}

#[test]
fn same_inputs_give_same_color() {
    let mapper = mapper();
    let first = mapper.color_for(Some("Rock"), 3, HighlightContext::GenreHighlighted);
    let second = mapper.color_for(Some("Rock"), 3, HighlightContext::GenreHighlighted);
    assert_eq!(first, second);
}

#[test]
fn hue_interpolation_wraps_around_zero() {
    let mid = Hsl::new(340.0, 0.5, 0.5).interpolate(Hsl::new(20.0, 0.5, 0.5), 0.5);
    assert_relative_eq!(mid.h, 0.0, epsilon = 1e-9);
}

#[test]
fn default_config_factors_match_mapper_factors() {
    let config = TimelineConfig::default();
    let mapper = ColorMapper::new(
        1,
        std::iter::empty(),
        config.unknown_genre_color_range,
        config.point.color_value_factors,
    );
    assert_eq!(mapper.factors(), factors());
}
