use log::warn;
use web_sys::HtmlVideoElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoPlayerProps {
    pub video_src: String,
    pub thumbnail_src: String,
    pub alt: String,
}

#[function_component(VideoPlayer)]
pub fn video_player(props: &VideoPlayerProps) -> Html {
    let video_ref = use_node_ref();
    let is_playing = use_state(|| false);

    let on_play = {
        let video_ref = video_ref.clone();
        let is_playing = is_playing.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(video) = video_ref.cast::<HtmlVideoElement>() else {
                return;
            };
            if let Err(e) = video.play() {
                warn!("Video playback refused: {:?}", e);
                return;
            }
            is_playing.set(true);
        })
    };

    let on_stop = {
        let is_playing = is_playing.clone();
        Callback::from(move |_: Event| is_playing.set(false))
    };

    html! {
        <div class="video-player">
            <video
                ref={video_ref}
                src={props.video_src.clone()}
                poster={props.thumbnail_src.clone()}
                aria-label={props.alt.clone()}
                controls={*is_playing}
                onpause={on_stop.clone()}
                onended={on_stop}
            />
            if !*is_playing {
                <div class="video-overlay" onclick={on_play}>
                    <div class="play-button">
                        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor">
                            <path d="M8 5v14l11-7z" />
                        </svg>
                    </div>
                </div>
            }

            <style>
                {r#"
                .video-player {
                    position: relative;
                    border-radius: 16px;
                    overflow: hidden;
                    width: 408px;
                    height: 245px;
                    flex-shrink: 0;
                }
                .video-player video {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .video-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.2);
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .video-overlay:hover {
                    background: rgba(0, 0, 0, 0.3);
                }
                .play-button {
                    width: 5rem;
                    height: 5rem;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.9);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    transition: transform 0.2s ease;
                }
                .play-button:hover {
                    transform: scale(1.1);
                }
                .play-button svg {
                    width: 2.5rem;
                    height: 2.5rem;
                    margin-left: 0.25rem;
                    color: #111827;
                }
                @media (max-width: 768px) {
                    .video-player {
                        width: 100%;
                    }
                }
                "#}
            </style>
        </div>
    }
}
