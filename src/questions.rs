/// The embedded question bank and the pool type the selector draws from.
///
/// The bank is fixed at compile time; per-guild ordering lives in the guild
/// schedule, never here.
pub struct QuestionPool {
    questions: &'static [&'static str],
}

impl QuestionPool {
    /// Create a pool over a fixed bank. An empty bank is a build
    /// misconfiguration, so it fails fast at startup.
    pub fn new(questions: &'static [&'static str]) -> Self {
        assert!(!questions.is_empty(), "question pool cannot be empty");
        Self { questions }
    }

    /// The pool backed by the embedded bank
    pub fn embedded() -> Self {
        Self::new(QUESTIONS)
    }

    /// Question at `index`, wrapping past the end of the bank
    pub fn get(&self, index: usize) -> &'static str {
        self.questions[index % self.questions.len()]
    }

    /// Number of questions in the bank
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the bank is empty (never true after construction)
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// The full MDickie question bank (DOS-era titles excluded)
pub const QUESTIONS: &[&str] = &[
    "What was the first MDickie game you ever played?",
    "Which MDickie game do you consider a masterpiece, and why?",
    "What’s the most iconic MDickie mechanic to you (e.g., ragdolls, dynamic dialog, sandbox chaos)?",
    "Which MDickie soundtrack track lives rent-free in your head?",
    "If you could ask Matt Dickie one dev question, what would it be?",
    "Which MDickie game has the best replay value?",
    "What’s your favorite MDickie character creator moment/feature?",
    "Which MDickie game has the funniest emergent chaos?",
    "What’s the most unexpected interaction you discovered in an MDickie game?",
    "Which MDickie game has the most memorable tutorial (or lack thereof!)?",
    "Which MDickie game do you recommend to total beginners?",
    "Mouse/keyboard, controller, or mobile—how do you play MDickie best?",
    "What small MDickie detail made you smile recently?",
    "What makes an ‘MDickie moment’ feel unique compared to other indie games?",
    "Which old MDickie title deserves a modern remaster the most?",
    "What difficulty/settings do you use for the most fun chaos?",
    "Which game’s story events surprised you the most?",
    "If MDickie made a totally new genre, what should it be?",
    "How would you describe MDickie games to someone who’s never played one?",
    "What was the biggest skill you learned from MDickie games (timing, positioning, reading AI)?",
    "Which MDickie game aged the best?",
    "Which feature do you wish appeared across *all* MDickie titles?",
    "What’s the most clutch save you’ve ever pulled off?",
    "What’s your favorite MDickie fan mod or idea?",
    "Which MDickie game’s menus/UI are the most memorable?",
    "Wrestling Empire: Which promotion do you start in and why?",
    "Wrestling Empire: Finisher you’re most proud of creating?",
    "Wrestling Empire: Most outrageous contract clause you’ve accepted?",
    "Wrestling Empire: Do you chase titles or build storylines?",
    "Wrestling Empire: Best arena you’ve fought in?",
    "Wrestling Empire: Favorite weapon spot?",
    "Wrestling Empire: Tag partner you always rely on?",
    "Wrestling Empire: Heel or face—what’s more fun?",
    "Wrestling Empire: Most chaotic backstage brawl?",
    "Wrestling Empire: Entrance theme vibe you like most?",
    "Wrestling Empire: How do you train stats efficiently?",
    "Wrestling Empire: What camera setting feels best?",
    "Wrestling Empire: Most controversial match ending you’ve seen?",
    "Wrestling Empire: Gimmick you wish existed?",
    "Wrestling Empire: Best rivalry you built from scratch?",
    "Wrestling Empire: Which move feels overpowered?",
    "Wrestling Empire: Ironman vs. Deathmatch—what’s peak fun?",
    "Wrestling Empire: Most hilarious botch that became canon in your save?",
    "Wrestling Empire: What’s your entrance pose/taunt of choice?",
    "Wrestling Empire: Best title run you’ve booked?",
    "Wrestling Empire: What’s your dream crossover match?",
    "Wrestling Empire: What slider or rule set makes matches perfect?",
    "Wrestling Empire: Favorite ref and why?",
    "Wrestling Empire: Custom arena idea you want to see?",
    "Wrestling Empire: Which real-life wrestler did you recreate the best?",
    "Hard Time: What crime did you ‘totally not’ commit?",
    "Hard Time: Best way to survive day one?",
    "Hard Time: Officer you fear/respect the most?",
    "Hard Time: Funniest cafeteria incident?",
    "Hard Time: Most broken weapon you’ve used?",
    "Hard Time: How do you deal with random fights?",
    "Hard Time: Best cellmate story?",
    "Hard Time: Do you read, train, or hustle for stats?",
    "Hard Time: What’s your go-to strategy for early freedom?",
    "Hard Time: Craziest courtroom scene outcome?",
    "Hard Time: Most valuable contraband?",
    "Hard Time: Favorite job or area in the prison?",
    "Hard Time: Have you ever run the whole prison?",
    "Hard Time: Saddest moment that hit harder than expected?",
    "Hard Time: How do you handle injury and fatigue?",
    "Hard Time: Most chaotic riot you survived?",
    "Hard Time: Role-playing a villain vs. reformed hero—what’s better?",
    "Hard Time: What rule do you actually follow?",
    "Hard Time: Favorite judge quote?",
    "Hard Time: Best improvised weapon combo?",
    "Hard Time: How often do you reset a run?",
    "Hard Time: Most dramatic escape story?",
    "Hard Time: NPC you secretly protect?",
    "Hard Time: Most unfair punishment you ate calmly?",
    "Hard Time: What mod/idea would refresh it most?",
    "School Days: Best class to slack in?",
    "School Days: Teacher who scares you straight?",
    "School Days: Funniest cafeteria throwdown?",
    "School Days: Club you always join?",
    "School Days: Best way to ace exams?",
    "School Days: Most outrageous detention reason?",
    "School Days: Favorite prank that escalated?",
    "School Days: Best way to make money in-game?",
    "School Days: Which subject do you actually role-play studying?",
    "School Days: How do you handle bullies?",
    "School Days: Coolest outfit you’ve made?",
    "School Days: Friend group archetype you run with?",
    "School Days: Most iconic classroom item?",
    "School Days: Principal meeting horror story?",
    "School Days: Best way to win fights you didn’t start?",
    "School Days: Romantic subplot chaos—yay or nay?",
    "School Days: Which teacher deserves a raise?",
    "School Days: Favorite field trip event?",
    "School Days: What gets you suspended the fastest?",
    "School Days: Most clutch exam save with low stats?",
    "School Days: Best after-school routine?",
    "School Days: Funniest line of dialog you’ve seen?",
    "School Days: Any pacifist playthroughs?",
    "School Days: Your signature class entrance?",
    "School Days: Dream spin-off feature?",
    "Extra Lives: Favorite class (human, zombie, mutant, android, etc.)?",
    "Extra Lives: Best base location?",
    "Extra Lives: What’s your apocalypse day one plan?",
    "Extra Lives: Favorite melee vs. ranged combo?",
    "Extra Lives: Which faction has the best vibes?",
    "Extra Lives: Craziest boss encounter?",
    "Extra Lives: Permadeath—on or off?",
    "Extra Lives: Most tragic companion loss?",
    "Extra Lives: Best food you found at 1 HP?",
    "Extra Lives: Nighttime strategy to survive hordes?",
    "Extra Lives: Weapon you always craft first?",
    "Extra Lives: Favorite quest chain?",
    "Extra Lives: Funniest zombie interaction?",
    "Extra Lives: Story twist that got you?",
    "Extra Lives: Ideal 3-member squad?",
    "Extra Lives: Best safe route between zones?",
    "Extra Lives: Which area creeps you out the most?",
    "Extra Lives: Which mutation perk is underrated?",
    "Extra Lives: Most cinematic moment you created?",
    "Extra Lives: What’s your endgame goal?",
    "Extra Lives: How do you ration meds and food?",
    "Extra Lives: Base defense layout tips?",
    "Extra Lives: Favorite survivor backstory?",
    "Extra Lives: NPC you always rescue?",
    "Extra Lives: Custom challenge idea?",
    "Weekend Warriors: Favorite martial art style to master?",
    "Weekend Warriors: Best training drill?",
    "Weekend Warriors: Your signature combo?",
    "Weekend Warriors: Tournament story you’re proud of?",
    "Weekend Warriors: Most intense sparring session?",
    "Weekend Warriors: What stats matter most?",
    "Super City: Favorite hero power set?",
    "Super City: Best villain arc you role-played?",
    "Super City: Coolest city location for fights?",
    "Super City: Flight vs. teleport—what’s more fun?",
    "Super City: Best costume you designed?",
    "Super City: Most chaotic civilian rescue?",
    "Super City: Rival you always keep around?",
    "Popscene: Stage you love performing on?",
    "Popscene: Best lyric you came up with?",
    "Popscene: Band drama story?",
    "Popscene: What instrument do you main?",
    "Popscene: How do you handle critics in-game?",
    "Popscene: Your album concept idea?",
    "Popscene: Best way to grow fans?",
    "Popscene: Most disastrous gig that became legendary?",
    "Popscene: Favorite producer NPC?",
    "Popscene: What genre fits Popscene best?",
    "Popscene: Merch idea that would slap?",
    "Popscene: Dream crossover with other MDickie worlds?",
    "If you were MDickie’s booking agent, what project would you pitch next?",
    "What’s your favorite emergent storyline you didn’t plan?",
    "Which NPC voice line became a meme for you?",
    "What’s a house rule you always use in MDickie games?",
    "What’s your favorite stat distribution and why?",
    "What’s a build you refuse to use because it’s too strong?",
    "What limits (injuries, rules, time) make the game better?",
    "What’s your ‘ironman’ rule set?",
    "What’s a self-imposed challenge you recommend?",
    "What’s your comfort game session length for MDickie titles?",
    "What’s the funniest bug you *want* to stay forever?",
    "What’s a QoL tweak you wish for without changing the soul?",
    "Which physics moment made you laugh out loud?",
    "What’s your favorite MDickie ‘quote’ or line delivery?",
    "What’s one mechanic you’d teach a new player first?",
    "What’s your favorite ‘zero-HUD’ or cinematic setting?",
    "What’s a crossover event you staged across games?",
    "What’s a community challenge we should try this week?",
    "What’s your go-to ‘hardcore’ save setup?",
    "What’s your soft spot MDickie character archetype?",
    "Which game handles injuries the best?",
    "Which game handles fame/reputation the best?",
    "What’s your favorite way to role-play morality swings?",
    "What’s an item you hoard for no reason?",
    "What’s your ultimate end-of-save goal across titles?",
    "Mobile or PC—where do MDickie games feel better and why?",
    "What controller layout feels most natural for you?",
    "What’s the first MDickie title you showed a friend?",
    "Which game do you revisit every year?",
    "What setting do you immediately change on a fresh save?",
    "What’s the most emotional moment you’ve had in an MDickie game?",
    "What fan theory actually makes sense?",
    "Which soundtrack deserves a live cover?",
    "What’s the best visual mod or reshade you’ve tried?",
    "What UI font/theme screams ‘MDickie’ to you?",
    "What’s your ideal save file naming scheme?",
    "What’s a perfect 20-minute MDickie session for you?",
    "What’s the longest single session you’ve done?",
    "What would a ‘photo mode’ add to your playstyle?",
    "What’s a city/setting you want MDickie to explore?",
    "Which historical era would fit an MDickie sandbox?",
    "What feature would help content creators the most?",
    "What’s the coolest community creation you’ve seen?",
    "What’s a *tiny* tweak that would make you cheer?",
    "What’s an accessibility feature you’d love added?",
    "What’s your favorite easter egg across the games?",
    "Which UI sound effect is peak nostalgia?",
    "What’s an item you wish returned across titles?",
    "Which NPC archetype needs a buff?",
    "What’s the most cinematic fight you staged?",
    "If you balanced one stat globally, which would it be?",
    "Which AI behavior feels the most human?",
    "What’s a bug that became a beloved feature?",
    "What core pillar defines MDickie design for you?",
    "What’s a risk MDickie took that paid off?",
    "What would a co-op focused MDickie title look like?",
    "What would a roguelike MDickie game change?",
    "What’s a UI/UX pattern MDickie nails?",
    "What’s a UI/UX pain you forgive because the game rules?",
    "How should tutorials be handled in MDickie style?",
    "What’s the best fail-state lesson you learned?",
    "How important are physics to the fun?",
    "What’s your stance on realism vs. fun in MDickie worlds?",
    "If you removed one mechanic from a game, which and why?",
    "What’s a resource economy idea you want to test?",
    "How would you rework injuries/fatigue across titles?",
    "What’s your dream dynamic soundtrack behavior?",
    "How do you feel about permadeath in MDickie games?",
    "What’s the ideal save scumming rule for you?",
    "Which MDickie UI needs a 2025 glow-up most?",
    "What pacing trick keeps you hooked?",
    "What’s your ideal difficulty curve?",
    "What’s one meta that new players sleep on?",
    "If MDickie did DLC, what would be perfect?",
    "What would a photojournalist MDickie game be like?",
    "Which MDickie meme always cracks you up?",
    "What’s your proudest clip you’ve recorded?",
    "Share a tip that helped you ‘get it’. What was it?",
    "What’s your favorite community challenge we’ve done?",
    "What’s a weekly theme we should run next month?",
    "Who’s your MDickie doubles partner (another player)?",
    "What’s your best ‘I can’t believe that worked’ story?",
    "Which NPC name makes you grin every time?",
    "What’s the most ridiculous outfit you’ve seen?",
    "What’s a wholesome moment you witnessed?",
    "What’s an MDickie hill you’ll die on?",
    "What’s your favorite control remap?",
    "What’s your go-to celebration/emote after a win?",
    "What’s your favorite MDickie quote to spam?",
    "What’s the best clip you’ve seen from someone else?",
    "What in-game day felt like a movie?",
    "What’s the best use of props you’ve pulled off?",
    "What’s your favorite low-stat underdog story?",
    "What’s one habit you had to unlearn to get better?",
    "What’s a challenge you want the server to try tomorrow?",
    "What’s your ‘perfect match’ setup?",
    "What song would you assign to your main character?",
    "What’s your favorite menu you’d print on a T-shirt?",
    "What crossover mod idea would break the internet?",
    "If you could cameo in one MDickie game, which and doing what?",
];
