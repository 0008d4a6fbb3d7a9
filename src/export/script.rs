//! Client-side navigation embedded in every page.

/// Keyboard and button navigation, slide counter and progress bar.
///
/// Expects the markup produced by [`super::HtmlExporter`]: `.slide`
/// elements, `#prev`/`#next` buttons, `#current`/`#total` counters and a
/// `#progressBar` element.
pub const NAVIGATION_SCRIPT: &str = r#"
        let currentSlide = 0;
        const slides = document.querySelectorAll('.slide');
        const totalSlides = slides.length;
        const prevBtn = document.getElementById('prev');
        const nextBtn = document.getElementById('next');
        const currentSpan = document.getElementById('current');
        const totalSpan = document.getElementById('total');
        const progressBar = document.getElementById('progressBar');

        totalSpan.textContent = totalSlides;

        function updateProgress() {
            const progress = ((currentSlide + 1) / totalSlides) * 100;
            progressBar.style.width = progress + '%';
        }

        function showSlide(n) {
            slides[currentSlide].classList.remove('active');
            currentSlide = (n + totalSlides) % totalSlides;
            slides[currentSlide].classList.add('active');
            currentSpan.textContent = currentSlide + 1;

            prevBtn.disabled = currentSlide === 0;
            nextBtn.disabled = currentSlide === totalSlides - 1;

            updateProgress();
        }

        function changeSlide(direction) {
            showSlide(currentSlide + direction);
        }

        document.addEventListener('keydown', (e) => {
            if (e.key === 'ArrowLeft' && currentSlide > 0) {
                changeSlide(-1);
            } else if (e.key === 'ArrowRight' && currentSlide < totalSlides - 1) {
                changeSlide(1);
            }
        });

        if (window.hljs) {
            hljs.highlightAll();
        }

        showSlide(0);
"#;
