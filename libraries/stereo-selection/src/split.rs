//! Rotating a playlist around a pivot item

use stereo_core::{Song, SongId};

/// Rotate `items` so that it starts right after the item whose key is `target`
///
/// Items before the match are wrapped around to the end. The match itself leads the
/// result when `keep` is set and is dropped otherwise. If nothing matches, the list
/// comes back unchanged.
pub fn split_list<T, K, F>(items: Vec<T>, target: &K, keep: bool, key: F) -> Vec<T>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut head = Vec::with_capacity(items.len());
    let mut tail = Vec::new();
    let mut found = false;

    for item in items {
        if found {
            head.push(item);
        } else if key(&item) == *target {
            found = true;
            if keep {
                head.push(item);
            }
        } else {
            tail.push(item);
        }
    }

    head.extend(tail);
    head
}

/// `split_list` keyed on song id
pub fn split_songs(songs: Vec<Song>, song_id: SongId, keep: bool) -> Vec<Song> {
    split_list(songs, &song_id, keep, |song| song.id)
}
