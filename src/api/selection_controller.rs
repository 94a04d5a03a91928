use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::{HighlightContext, Hsl, PixelPosition, Scrobble};
use crate::error::TimelineResult;
use crate::interaction::{KeyCommand, SelectionState};
use crate::render::{
    LabelPrimitive, PointPrimitive, RenderCommand, Renderer, ScrobbleInfo, TimeLabelSlot,
};

use super::TimelineEngine;

impl<R: Renderer> TimelineEngine<R> {
    /// Selects the scrobble under the pointer, if any.
    ///
    /// Returns `false` when nothing is plotted at `(x, y)`; state is left
    /// untouched in that case.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> TimelineResult<bool> {
        let Some(point) = self.point_buffer.get_point(x, y) else {
            return Ok(false);
        };
        let scrobble = Arc::clone(&point.scrobble);
        self.select_scrobble(scrobble)?;
        Ok(true)
    }

    /// Highlights every visible scrobble of `genre` and labels its artists.
    pub fn legend_click(&mut self, genre: &str, genre_group: &str) -> TimelineResult<()> {
        self.selection = SelectionState::Idle;
        self.remove_highlight()?;
        self.reset_ui()?;

        self.highlight_genre_points(genre, Some(genre_group), None, true)?;
        self.renderer
            .render(RenderCommand::HighlightLegendGenre(genre.to_owned()))?;

        debug!(genre, genre_group, "genre highlighted");
        self.selection = SelectionState::GenreHighlighted {
            genre: genre.to_owned(),
            genre_group: genre_group.to_owned(),
        };
        Ok(())
    }

    /// Drops any highlight and returns to the intro readout.
    pub fn escape(&mut self) -> TimelineResult<()> {
        self.selection = SelectionState::Idle;
        self.remove_highlight()?;
        self.reset_ui()?;
        trace!("selection cleared");
        Ok(())
    }

    pub fn key_down(&mut self, command: KeyCommand) -> TimelineResult<bool> {
        match command {
            KeyCommand::Escape => {
                self.escape()?;
                Ok(true)
            }
            arrow => self.select_adjacent(arrow.shift(), arrow.keeps_row()),
        }
    }

    /// Moves the selection `shift` steps through the visible scrobbles.
    ///
    /// With `keep_row` only scrobbles drawn on the selected scrobble's row
    /// (same artist playcount) are considered. Returns `false` when nothing is
    /// selected or no candidate exists.
    pub fn select_adjacent(&mut self, shift: isize, keep_row: bool) -> TimelineResult<bool> {
        let Some(selected) = self.selection.selected_scrobble().cloned() else {
            return Ok(false);
        };

        let adjacent = if keep_row {
            let row = selected.artist.playcount;
            self.zoomed
                .get_adjacent(&selected, shift, |candidate| candidate.artist.playcount == row)
        } else {
            self.zoomed.get_neighbor(&selected, shift)
        };

        match adjacent.cloned() {
            Some(scrobble) => {
                self.select_scrobble(scrobble)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Selects one scrobble.
    ///
    /// The previous highlight is always restored first. Labels and the legend
    /// highlight are only rebuilt when the artist changes. If a render command
    /// fails the selection is left `Idle`.
    pub fn select_scrobble(&mut self, scrobble: Arc<Scrobble>) -> TimelineResult<()> {
        let is_new_artist =
            self.selection.selected_artist() != Some(scrobble.artist.name.as_str());

        self.selection = SelectionState::Idle;
        self.remove_highlight()?;

        if is_new_artist {
            self.renderer.render(RenderCommand::ClearLegendHighlight)?;
            self.renderer.render(RenderCommand::ClearArtistLabels)?;
        }

        if let Some(genre) = scrobble.artist.genre.as_deref() {
            self.highlight_genre_points(
                genre,
                scrobble.artist.genre_group.as_deref(),
                Some(scrobble.artist.name.as_str()),
                is_new_artist,
            )?;
            if is_new_artist {
                self.renderer
                    .render(RenderCommand::HighlightLegendGenre(genre.to_owned()))?;
            }
        }

        self.highlight_artist_points(&scrobble, is_new_artist)?;
        self.selection = SelectionState::ScrobbleSelected(Arc::clone(&scrobble));

        let totals = self.summary.get_totals(&scrobble);
        debug!(
            index = scrobble.index,
            artist = %scrobble.artist.name,
            is_new_artist,
            "scrobble selected"
        );
        self.renderer
            .render(RenderCommand::ShowScrobbleInfo(Box::new(ScrobbleInfo {
                scrobble,
                totals,
            })))
    }

    /// Redraws `genre`'s points with the genre context color.
    ///
    /// Points of `skip_artist` are left to the artist highlight. With
    /// `render_labels` each other artist gets a secondary label at its last
    /// drawn point.
    fn highlight_genre_points(
        &mut self,
        genre: &str,
        genre_group: Option<&str>,
        skip_artist: Option<&str>,
        render_labels: bool,
    ) -> TimelineResult<()> {
        let Some(points) = self.genre_registry.get_point_list(genre) else {
            return Ok(());
        };

        let mut last_by_artist: IndexMap<String, (PixelPosition, Hsl)> = IndexMap::new();
        for point in points {
            let artist = &point.scrobble.artist.name;
            if skip_artist == Some(artist.as_str()) {
                continue;
            }

            let color = self.color_mapper.color_for(
                genre_group,
                point.scrobble.album.playcount,
                HighlightContext::GenreHighlighted,
            );
            self.renderer
                .render(RenderCommand::Point(PointPrimitive::new(point.x, point.y, color)))?;
            self.highlighted.push(point.position());

            if render_labels {
                last_by_artist.insert(artist.clone(), (point.position(), color));
            }
        }

        let container_width = f64::from(self.renderer.surface_size().width);
        for (artist, (position, color)) in last_by_artist {
            self.renderer.render(RenderCommand::ArtistLabel(LabelPrimitive {
                x: position.x,
                y: position.y,
                container_width,
                text: artist,
                color,
                is_primary: false,
            }))?;
        }

        Ok(())
    }

    /// Redraws the selected artist's points, then the selected track's on top.
    fn highlight_artist_points(
        &mut self,
        scrobble: &Scrobble,
        render_label: bool,
    ) -> TimelineResult<()> {
        let Some(points) = self.artist_registry.get_point_list(&scrobble.artist.name) else {
            return Ok(());
        };

        let container_width = f64::from(self.renderer.surface_size().width);
        let genre_group = scrobble.artist.genre_group.as_deref();
        let mut same_track = Vec::new();
        let mut last_drawn = None;

        for point in points {
            let color = self.color_mapper.color_for(
                genre_group,
                point.scrobble.album.playcount,
                HighlightContext::ArtistSelected,
            );
            self.highlighted.push(point.position());
            last_drawn = Some((point.position(), color));

            if point.scrobble.track.name == scrobble.track.name {
                same_track.push(point.position());
            } else {
                self.renderer
                    .render(RenderCommand::Point(PointPrimitive::new(point.x, point.y, color)))?;
            }

            if point.scrobble.index == scrobble.index {
                self.renderer.render(RenderCommand::TimeLabel {
                    slot: TimeLabelSlot::SelectedScrobble,
                    x: point.x,
                    container_width,
                    text: point.scrobble.date.clone(),
                })?;
            }
        }

        let selected_color = self.config.point.selected_color;
        for position in same_track {
            self.renderer.render(RenderCommand::Point(PointPrimitive::new(
                position.x,
                position.y,
                selected_color,
            )))?;
        }

        if render_label {
            if let Some((position, color)) = last_drawn {
                self.renderer.render(RenderCommand::ArtistLabel(LabelPrimitive {
                    x: position.x,
                    y: position.y,
                    container_width,
                    text: scrobble.artist.name.clone(),
                    color,
                    is_primary: true,
                }))?;
            }
        }

        Ok(())
    }

    /// Restores every highlighted point to its buffered color.
    ///
    /// The buffer keeps one point per cell, so a point sharing its cell with
    /// a later one is restored with that later point's color.
    fn remove_highlight(&mut self) -> TimelineResult<()> {
        let positions = self.highlighted.take_all();
        let restored = positions.len();
        for position in positions {
            if let Some(point) = self.point_buffer.get_point(position.x, position.y) {
                self.renderer.render(RenderCommand::Point(PointPrimitive::new(
                    position.x,
                    position.y,
                    point.color,
                )))?;
            }
        }
        if restored > 0 {
            trace!(restored, "highlight removed");
        }
        Ok(())
    }
}
